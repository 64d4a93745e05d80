//! Resident polled loop driving the node at ~1 Hz.

use std::time::Duration;

use telemeter_traits::clock::Clock;
use telemeter_traits::{RadioLink, RangeSensor, WallClock};

use crate::error::Result;
use crate::node::TelemeterNode;
use crate::status::TickOutcome;
use crate::util::MILLIS_PER_SEC;

/// Drive `node` from `clock` until `stop` returns true.
///
/// A tick runs only when the millisecond counter modulo 1000 is zero, the
/// 1 Hz approximation used on hosts without a timer interrupt; a slot key on
/// the whole second prevents double ticks while the counter sits on a
/// boundary. Between boundaries the loop sleeps 1 ms, so a boundary can only
/// be missed if the host stalls for longer than that; the tick for that
/// second is then skipped rather than run late.
///
/// `startup()` must have been called first. Periodic clock resync (when
/// configured) happens here, between ticks, never inside one.
pub fn run_resident<S, R, W, C, F>(
    node: &mut TelemeterNode<S, R, W>,
    clock: &C,
    mut stop: F,
) -> Result<()>
where
    S: RangeSensor,
    R: RadioLink,
    W: WallClock,
    C: Clock,
    F: FnMut() -> bool,
{
    let epoch = clock.now();
    let mut last_slot: Option<u64> = None;
    tracing::info!("resident loop running");
    loop {
        if stop() {
            tracing::info!("resident loop stopping");
            return Ok(());
        }
        let ms = clock.ms_since(epoch);
        let slot = ms / MILLIS_PER_SEC;
        if ms % MILLIS_PER_SEC == 0 && last_slot != Some(slot) {
            last_slot = Some(slot);
            node.maybe_resync();
            match node.tick()? {
                TickOutcome::Sampled { .. } => {}
                TickOutcome::Reported { report, .. } => {
                    tracing::debug!(median = report.median, "scheduled report accepted");
                }
                TickOutcome::SendFailed { .. } => {
                    // logged by the node; next grid slot is the retry point
                }
            }
        } else {
            clock.sleep(Duration::from_millis(1));
        }
    }
}
