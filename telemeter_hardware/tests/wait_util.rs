use std::time::Duration;

use telemeter_hardware::error::HwError;
use telemeter_hardware::util::{
    measure_pulse, wait_until_high_with_timeout, wait_until_low_with_timeout,
};

#[test]
fn wait_high_returns_once_line_rises() {
    let mut calls = 0;
    let res = wait_until_high_with_timeout(
        || {
            calls += 1;
            calls >= 3
        },
        Duration::from_millis(100),
        Duration::from_micros(50),
    );
    assert!(res.is_ok());
    assert_eq!(calls, 3);
}

#[test]
fn wait_low_times_out_on_stuck_line() {
    let res = wait_until_low_with_timeout(
        || true,
        Duration::from_millis(5),
        Duration::from_micros(100),
    );
    assert!(matches!(res, Err(HwError::EchoTimeout)));
}

#[test]
fn measure_pulse_spans_rise_to_fall() {
    // high for polls 2..=5, low before and after
    let mut polls = 0;
    let width = measure_pulse(
        || {
            polls += 1;
            (2..=5).contains(&polls)
        },
        Duration::from_millis(100),
        Duration::from_micros(200),
    )
    .expect("pulse completes");
    assert!(width >= Duration::from_micros(400));
}

#[test]
fn measure_pulse_fails_when_pulse_never_starts() {
    let res = measure_pulse(
        || false,
        Duration::from_millis(5),
        Duration::from_micros(100),
    );
    assert!(matches!(res, Err(HwError::EchoTimeout)));
}
