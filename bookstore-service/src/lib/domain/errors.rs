use thiserror::Error;

/// Domain error taxonomy shared by every layer.
///
/// Each variant renders a fixed, caller-safe message. `Internal` carries the
/// underlying cause for server-side logging only; it is not part of the
/// rendered message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("data not found")]
    DataNotFound,

    #[error("data conflicts with existing data in unique column")]
    ConflictingData,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("internal error")]
    Internal(String),

    #[error("error creating token")]
    TokenCreation,
}

impl DomainError {
    /// Wrap any failure the taxonomy does not name.
    pub fn internal(cause: impl ToString) -> Self {
        DomainError::Internal(cause.to_string())
    }
}

impl From<anyhow::Error> for DomainError {
    fn from(err: anyhow::Error) -> Self {
        DomainError::Internal(format!("{:#}", err))
    }
}
