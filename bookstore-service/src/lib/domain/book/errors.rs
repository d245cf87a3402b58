use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid book id: {0}")]
    InvalidFormat(String),
}

/// Error for book field validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    #[error("{field} must be between 1 and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("price must be a finite number greater than zero, got {0}")]
    InvalidPrice(f64),
}
