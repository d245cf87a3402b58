//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id)
//! - JWT issuance and strict verification (HS256, issuer, audience, expiry)
//!
//! Services define their own authentication ports and adapt these
//! implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "bookstore",
//!     "bookstore-clients",
//!     Duration::days(3),
//! )
//! .unwrap();
//! let token = handler.issue("user123").unwrap();
//! let claims = handler.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
