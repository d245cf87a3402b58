use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Registered JWT claims carried by every access token.
///
/// Every field is mandatory: the handler refuses tokens missing any of the
/// time-bound or identity claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique token identifier)
    pub jti: String,
}

impl Claims {
    /// Create claims valid from now until `now + lifetime`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `issuer` - Issuing service
    /// * `audience` - Intended recipient
    /// * `lifetime` - Validity horizon
    pub fn new(
        subject: impl ToString,
        issuer: impl ToString,
        audience: impl ToString,
        lifetime: Duration,
    ) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject.to_string(),
            exp: now + lifetime.num_seconds(),
            iat: now,
            nbf: now,
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Override expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Override not-before (Unix timestamp).
    pub fn with_not_before(mut self, nbf: i64) -> Self {
        self.nbf = nbf;
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
