use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;

use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::TokenService;
use crate::domain::errors::DomainError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::ports::UserRepository;

/// Login flow: user lookup, password verification, token issuance.
///
/// An unknown email and a wrong password produce the same
/// `InvalidCredentials` error so callers cannot probe for accounts.
pub struct AuthService<UR, TS>
where
    UR: UserRepository,
    TS: TokenService,
{
    repository: Arc<UR>,
    token_service: Arc<TS>,
    password_hasher: auth::PasswordHasher,
}

impl<UR, TS> AuthService<UR, TS>
where
    UR: UserRepository,
    TS: TokenService,
{
    pub fn new(repository: Arc<UR>, token_service: Arc<TS>) -> Self {
        Self {
            repository,
            token_service,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

/// Hash checked for unknown emails, so that path runs one Argon2
/// verification just like a wrong password does.
fn decoy_hash(hasher: &auth::PasswordHasher) -> &'static str {
    static DECOY: OnceLock<String> = OnceLock::new();

    DECOY.get_or_init(|| {
        hasher.hash("decoy-password").unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build decoy password hash");
            String::new()
        })
    })
}

#[async_trait]
impl<UR, TS> AuthServicePort for AuthService<UR, TS>
where
    UR: UserRepository,
    TS: TokenService,
{
    async fn login(
        &self,
        email: &EmailAddress,
        password: &Password,
    ) -> Result<String, DomainError> {
        let user = match self.repository.find_by_email(email).await {
            Ok(user) => user,
            Err(DomainError::DataNotFound) => {
                let _ = self
                    .password_hasher
                    .verify(password.expose(), decoy_hash(&self.password_hasher));
                return Err(DomainError::InvalidCredentials);
            }
            Err(DomainError::Internal(detail)) => return Err(DomainError::Internal(detail)),
            Err(other) => return Err(DomainError::internal(other)),
        };

        match self
            .password_hasher
            .verify(password.expose(), &user.password_hash)
        {
            Ok(true) => {}
            Ok(false) => return Err(DomainError::InvalidCredentials),
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
                return Err(DomainError::InvalidCredentials);
            }
        }

        let token = self.token_service.create_token(&user).map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Token creation failed");
            DomainError::TokenCreation
        })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }
}
