//! Test and helper mocks for telemeter_core

/// A sensor that always errors on measure; the node records the fault
/// sentinel for every tick driven through it.
pub struct NoopSensor;

impl telemeter_traits::RangeSensor for NoopSensor {
    fn measure(
        &mut self,
        _timeout: std::time::Duration,
    ) -> Result<u32, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop sensor")))
    }
}

/// A link that accepts everything and never produces a reply; clock sync
/// through it always falls back to the baseline epoch.
pub struct NoopRadio;

impl telemeter_traits::RadioLink for NoopRadio {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn send(&mut self, _frame: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn send_with_reply(
        &mut self,
        _frame: &[u8],
        _timeout: std::time::Duration,
    ) -> Result<Option<Vec<u8>>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(None)
    }
}
