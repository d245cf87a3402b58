use auth::JwtError;
use auth::JwtHandler;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::TokenPayload;
use crate::domain::auth::ports::TokenService;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// HS256 bearer tokens backed by the shared JWT handler.
pub struct JwtTokenService {
    handler: JwtHandler,
}

impl JwtTokenService {
    pub fn new(handler: JwtHandler) -> Self {
        Self { handler }
    }
}

impl TokenService for JwtTokenService {
    fn create_token(&self, user: &User) -> Result<String, TokenError> {
        self.handler.issue(user.id).map_err(to_token_error)
    }

    fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let claims = self.handler.decode(token).map_err(to_token_error)?;

        let user_id = UserId::from_string(&claims.sub)
            .map_err(|e| TokenError::Invalid(format!("subject: {}", e)))?;

        Ok(TokenPayload {
            user_id,
            issued_at: timestamp(claims.iat)?,
            expires_at: timestamp(claims.exp)?,
        })
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| TokenError::Invalid(format!("timestamp out of range: {}", seconds)))
}

fn to_token_error(err: JwtError) -> TokenError {
    match err {
        JwtError::TokenExpired => TokenError::Expired,
        JwtError::EmptySecret | JwtError::EncodingFailed(_) => TokenError::Signing(err.to_string()),
        other => TokenError::Invalid(other.to_string()),
    }
}
