use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures keep their reason so callers can tell an expired
/// token from a forged one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is not valid yet")]
    NotYetValid,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token algorithm is not accepted")]
    InvalidAlgorithm,

    #[error("Token issuer does not match")]
    InvalidIssuer,

    #[error("Token audience does not match")]
    InvalidAudience,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
