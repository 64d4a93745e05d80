use std::time::{Duration, Instant};

use crate::error::{HwError, Result};

/// Wait until `is_high` becomes true (echo pulse start), or fail after
/// `timeout`. Sleeps in small intervals to avoid CPU spinning.
pub fn wait_until_high_with_timeout(
    mut is_high: impl FnMut() -> bool,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    while !is_high() {
        if Instant::now() >= deadline {
            return Err(HwError::EchoTimeout);
        }
        std::thread::sleep(poll_interval);
    }
    Ok(())
}

/// Wait until `is_high` becomes false (echo pulse end), or fail after
/// `timeout`.
pub fn wait_until_low_with_timeout(
    mut is_high: impl FnMut() -> bool,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    while is_high() {
        if Instant::now() >= deadline {
            return Err(HwError::EchoTimeout);
        }
        std::thread::sleep(poll_interval);
    }
    Ok(())
}

/// Measure the width of one high pulse on `is_high`, bounded by `timeout`
/// for each edge. This is the timing primitive an echo-based rangefinder
/// driver builds on; distance is proportional to the returned width.
pub fn measure_pulse(
    mut is_high: impl FnMut() -> bool,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<Duration> {
    wait_until_high_with_timeout(&mut is_high, timeout, poll_interval)?;
    let start = Instant::now();
    wait_until_low_with_timeout(&mut is_high, timeout, poll_interval)?;
    Ok(start.elapsed())
}
