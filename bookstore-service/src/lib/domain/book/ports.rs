use async_trait::async_trait;

use crate::domain::book::models::Book;
use crate::domain::book::models::BookDraft;
use crate::domain::book::models::BookId;
use crate::domain::errors::DomainError;
use crate::domain::pagination::Page;

/// Port for book catalogue operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Add a book to the catalogue.
    ///
    /// # Errors
    /// * `ConflictingData` - A book with the same name and author exists
    /// * `Internal` - Storage failed
    async fn create_book(&self, draft: BookDraft) -> Result<Book, DomainError>;

    /// # Errors
    /// * `DataNotFound` - Book does not exist
    /// * `Internal` - Storage failed
    async fn get_book(&self, id: &BookId) -> Result<Book, DomainError>;

    async fn list_books(&self, page: Page) -> Result<Vec<Book>, DomainError>;

    /// Replace every field of an existing book.
    ///
    /// # Errors
    /// * `DataNotFound` - Book does not exist
    /// * `ConflictingData` - New name and author collide with another book
    /// * `Internal` - Storage failed
    async fn update_book(&self, id: &BookId, draft: BookDraft) -> Result<Book, DomainError>;

    /// # Errors
    /// * `DataNotFound` - Book does not exist
    /// * `Internal` - Storage failed
    async fn delete_book(&self, id: &BookId) -> Result<(), DomainError>;
}

/// Persistence operations for book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn create(&self, draft: BookDraft) -> Result<Book, DomainError>;

    async fn find_by_id(&self, id: &BookId) -> Result<Book, DomainError>;

    async fn list(&self, page: Page) -> Result<Vec<Book>, DomainError>;

    /// Absent row is `DataNotFound`.
    async fn update(&self, id: &BookId, draft: BookDraft) -> Result<Book, DomainError>;

    /// Absent row is `DataNotFound`.
    async fn delete(&self, id: &BookId) -> Result<(), DomainError>;
}
