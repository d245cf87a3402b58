use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::models::Book;
use crate::domain::book::models::BookDraft;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::errors::DomainError;
use crate::domain::pagination::Page;

/// Domain service implementation for book operations.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(&self, draft: BookDraft) -> Result<Book, DomainError> {
        let book = self.repository.create(draft).await?;

        tracing::info!(book_id = %book.id, "Book created");

        Ok(book)
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, DomainError> {
        self.repository.find_by_id(id).await
    }

    async fn list_books(&self, page: Page) -> Result<Vec<Book>, DomainError> {
        self.repository.list(page).await
    }

    async fn update_book(&self, id: &BookId, draft: BookDraft) -> Result<Book, DomainError> {
        self.repository.update(id, draft).await
    }

    async fn delete_book(&self, id: &BookId) -> Result<(), DomainError> {
        self.repository.delete(id).await?;

        tracing::info!(book_id = %id, "Book deleted");

        Ok(())
    }
}
