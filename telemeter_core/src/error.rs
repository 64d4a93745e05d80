use thiserror::Error;

/// Faults that surface to callers. Sensor faults and missing time replies
/// are not errors: they degrade to the 0 sentinel and the baseline epoch
/// respectively, and only show up in logs and `TickOutcome`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TelemeterError {
    #[error("link init failed: {0}")]
    LinkInit(String),
    #[error("transmission not accepted: {0}")]
    Transmission(String),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
