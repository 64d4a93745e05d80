pub mod clock;

pub use clock::{Clock, MonotonicClock};

/// Distance sensor abstraction.
///
/// Readings are already scaled to tenths of a millimeter. `Ok(0)` is the
/// reserved fault sentinel for an invalid or timed-out measurement;
/// implementations are expected to retry internally (typically up to 3
/// attempts, each bounded by `timeout`) before giving up.
pub trait RangeSensor {
    fn measure(
        &mut self,
        timeout: std::time::Duration,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>>;
}

/// Radio link abstraction over an opaque, bandwidth-constrained network.
///
/// `send` reports link-layer acceptance only, not delivery. `send_with_reply`
/// blocks for a bounded round trip and yields `Ok(None)` when no reply
/// arrived within `timeout`; `Err` is reserved for link-layer faults.
pub trait RadioLink {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn send(&mut self, frame: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn send_with_reply(
        &mut self,
        frame: &[u8],
        timeout: std::time::Duration,
    ) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Wall-clock-of-day abstraction (RTC register view).
///
/// Carries hours/minutes/seconds only; there is no date component.
/// Implementations advance on their own once set.
pub trait WallClock {
    fn set_time(&mut self, hours: u8, minutes: u8, seconds: u8);
    fn hours(&self) -> u8;
    fn minutes(&self) -> u8;
    fn seconds(&self) -> u8;
}
