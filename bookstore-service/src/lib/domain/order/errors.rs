use thiserror::Error;

/// Error for OrderId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderIdError {
    #[error("Invalid order id: {0}")]
    InvalidFormat(String),
}
