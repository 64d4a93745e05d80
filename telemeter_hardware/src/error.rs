use thiserror::Error;

#[derive(Debug, Error)]
pub enum HwError {
    #[error("echo pulse timeout")]
    EchoTimeout,
    #[error("link down")]
    LinkDown,
    #[error("link rejected frame")]
    Rejected,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HwError>;
