use async_trait::async_trait;

use crate::domain::auth::errors::TokenError;
use crate::domain::auth::models::TokenPayload;
use crate::domain::errors::DomainError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;

/// Port for credential login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange email and password for a signed bearer token.
    ///
    /// # Returns
    /// Compact JWS token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenCreation` - Signing failed
    /// * `Internal` - Storage failed
    async fn login(&self, email: &EmailAddress, password: &Password)
        -> Result<String, DomainError>;
}

/// Issues and verifies signed bearer tokens.
pub trait TokenService: Send + Sync + 'static {
    /// Mint a token whose subject is the user's id.
    fn create_token(&self, user: &User) -> Result<String, TokenError>;

    /// Validate signature, algorithm, time bounds, issuer and audience.
    fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError>;
}
