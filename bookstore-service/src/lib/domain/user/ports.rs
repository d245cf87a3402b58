use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::pagination::Page;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `ConflictingData` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: CreateUserCommand) -> Result<User, DomainError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `DataNotFound` - User does not exist
    /// * `Internal` - Storage failed
    async fn get_user(&self, id: &UserId) -> Result<User, DomainError>;

    /// List users ordered by id.
    ///
    /// # Errors
    /// * `Internal` - Storage failed
    async fn list_users(&self, page: Page) -> Result<Vec<User>, DomainError>;

    /// Update existing user with optional fields.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `command` - Command with optional name, email, and password fields
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `DataNotFound` - User does not exist
    /// * `ConflictingData` - New email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, DomainError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `DataNotFound` - User does not exist
    /// * `Internal` - Storage failed
    async fn delete_user(&self, id: &UserId) -> Result<(), DomainError>;
}

/// Persistence operations for user aggregate.
///
/// Implementations translate storage failures into the domain taxonomy: an
/// absent row is `DataNotFound`, a unique-constraint violation is
/// `ConflictingData`, anything else (including an elapsed query deadline) is
/// `Internal`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `ConflictingData` - Email is already registered
    /// * `Internal` - Storage failed
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DataNotFound` - No such user
    /// * `Internal` - Storage failed
    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `DataNotFound` - No user with this email
    /// * `Internal` - Storage failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, DomainError>;

    /// Retrieve a page of users ordered by id.
    ///
    /// # Errors
    /// * `Internal` - Storage failed
    async fn list(&self, page: Page) -> Result<Vec<User>, DomainError>;

    /// Update existing user in storage.
    ///
    /// # Errors
    /// * `DataNotFound` - User does not exist
    /// * `ConflictingData` - New email is already registered
    /// * `Internal` - Storage failed
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `DataNotFound` - User does not exist
    /// * `Internal` - Storage failed
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
