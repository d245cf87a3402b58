use serde::Deserialize;

use crate::domain::book::models::BookDraft;
use crate::inbound::http::handlers::ApiError;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

pub use create_book::create_book;
pub use delete_book::delete_book;
pub use get_book::get_book;
pub use list_books::list_books;
pub use update_book::update_book;

/// HTTP request body for creating or replacing a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookRequest {
    name: String,
    description: String,
    author: String,
    price: f64,
    #[serde(default)]
    cover: Option<String>,
}

impl BookRequest {
    fn try_into_draft(self) -> Result<BookDraft, ApiError> {
        BookDraft::new(
            self.name,
            self.description,
            self.author,
            self.price,
            self.cover,
        )
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))
    }
}
