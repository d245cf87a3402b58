use std::fmt;
use std::str::FromStr;

use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UserNameError;

/// User aggregate entity.
///
/// `password_hash` is the stored Argon2 PHC string. It never leaves the
/// service through any response type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// User unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Arguments
    /// * `s` - Decimal id to parse
    ///
    /// # Returns
    /// Parsed UserId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(UserId(id)),
            Ok(id) => Err(UserIdError::InvalidFormat(format!(
                "expected a positive integer, got {}",
                id
            ))),
            Err(e) => Err(UserIdError::InvalidFormat(e.to_string())),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Ensures the name is non-blank and at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    const MAX_LENGTH: usize = 100;

    /// Create a new valid display name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, UserNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(UserNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UserNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Fits the `users.email` column.
    const MAX_LENGTH: usize = 254;

    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    /// * `TooLong` - More than 254 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_string();
        let length = email.chars().count();

        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password accepted from a caller.
///
/// Wrapped in a secret so it is redacted from `Debug` output; the only way to
/// read it is `expose`, which the service calls right before hashing or
/// verifying.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `TooShort` - Fewer than 3 characters
    /// * `TooLong` - More than 100 characters
    pub fn new(password: SecretString) -> Result<Self, PasswordPolicyError> {
        let length = password.expose_secret().chars().count();

        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// User row to insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Password,
}

impl CreateUserCommand {
    /// Construct a new registration command.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Plaintext password (hashed by the service)
    pub fn new(name: UserName, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to update an existing user with optional validated fields.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub name: Option<UserName>,
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_string() {
        assert_eq!(UserId::from_string("42"), Ok(UserId(42)));
        assert!(UserId::from_string("0").is_err());
        assert!(UserId::from_string("-3").is_err());
        assert!(UserId::from_string("abc").is_err());
    }

    #[test]
    fn test_user_name_validation() {
        assert_eq!(
            UserName::new("  Alice  ".to_string()).unwrap().as_str(),
            "Alice"
        );
        assert_eq!(UserName::new("   ".to_string()), Err(UserNameError::Empty));
        assert_eq!(
            UserName::new("x".repeat(101)),
            Err(UserNameError::TooLong {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(
            EmailAddress::new("a@x.com".to_string()).unwrap().as_str(),
            "a@x.com"
        );
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_email_longer_than_column_rejected() {
        let label = "b".repeat(63);
        let email = format!("{}@{}.{}.{}.com", "a".repeat(64), label, label, label);
        assert_eq!(email.len(), 260);

        assert_eq!(
            EmailAddress::new(email),
            Err(EmailError::TooLong {
                max: 254,
                actual: 260
            })
        );

        let at_limit = format!("{}@{}.{}.{}", "a".repeat(62), label, label, label);
        assert_eq!(at_limit.len(), 254);
        assert!(EmailAddress::new(at_limit).is_ok());
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new(SecretString::new("secret123".to_string())).is_ok());
        assert!(matches!(
            Password::new(SecretString::new("ab".to_string())),
            Err(PasswordPolicyError::TooShort { min: 3, actual: 2 })
        ));
        assert!(matches!(
            Password::new(SecretString::new("a".repeat(101))),
            Err(PasswordPolicyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let password = Password::new(SecretString::new("secret123".to_string())).unwrap();

        assert!(!format!("{:?}", password).contains("secret123"));
        assert_eq!(password.expose(), "secret123");
    }
}
