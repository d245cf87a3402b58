use std::fmt;

use crate::domain::book::errors::BookError;
use crate::domain::book::errors::BookIdError;

/// Book catalogue entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub description: String,
    pub author: String,
    pub price: f64,
    pub cover: String,
}

impl Book {
    /// Attach a store-assigned id to validated fields.
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            author: draft.author,
            price: draft.price,
            cover: draft.cover,
        }
    }
}

/// Book unique identifier type, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub i64);

impl BookId {
    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(BookId(id)),
            Ok(id) => Err(BookIdError::InvalidFormat(format!(
                "expected a positive integer, got {}",
                id
            ))),
            Err(e) => Err(BookIdError::InvalidFormat(e.to_string())),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated book fields, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    name: String,
    description: String,
    author: String,
    price: f64,
    cover: String,
}

impl BookDraft {
    const NAME_MAX: usize = 100;
    const DESCRIPTION_MAX: usize = 1000;
    const AUTHOR_MAX: usize = 50;

    /// Validate raw book fields.
    ///
    /// Text fields are trimmed. A missing cover is stored as an empty string.
    ///
    /// # Errors
    /// * `Length` - A text field is blank or exceeds its maximum
    /// * `InvalidPrice` - Price is not finite or not positive
    pub fn new(
        name: String,
        description: String,
        author: String,
        price: f64,
        cover: Option<String>,
    ) -> Result<Self, BookError> {
        let name = bounded("name", name, Self::NAME_MAX)?;
        let description = bounded("description", description, Self::DESCRIPTION_MAX)?;
        let author = bounded("author", author, Self::AUTHOR_MAX)?;

        if !price.is_finite() || price <= 0.0 {
            return Err(BookError::InvalidPrice(price));
        }

        Ok(Self {
            name,
            description,
            author,
            price,
            cover: cover.map(|c| c.trim().to_string()).unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cover(&self) -> &str {
        &self.cover
    }
}

fn bounded(field: &'static str, value: String, max: usize) -> Result<String, BookError> {
    let value = value.trim().to_string();
    let actual = value.chars().count();

    if actual == 0 || actual > max {
        return Err(BookError::Length { field, max, actual });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, author: &str, price: f64) -> Result<BookDraft, BookError> {
        BookDraft::new(
            name.to_string(),
            "A novel".to_string(),
            author.to_string(),
            price,
            None,
        )
    }

    #[test]
    fn test_valid_draft() {
        let book = BookDraft::new(
            " Dune ".to_string(),
            "Desert planet".to_string(),
            "Frank Herbert".to_string(),
            9.99,
            Some("https://covers.example/dune.png".to_string()),
        )
        .unwrap();

        assert_eq!(book.name(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert_eq!(book.price(), 9.99);
        assert_eq!(book.cover(), "https://covers.example/dune.png");
    }

    #[test]
    fn test_cover_defaults_to_empty() {
        assert_eq!(draft("Dune", "Frank Herbert", 1.0).unwrap().cover(), "");
    }

    #[test]
    fn test_text_bounds() {
        assert_eq!(
            draft("   ", "Frank Herbert", 1.0),
            Err(BookError::Length {
                field: "name",
                max: 100,
                actual: 0
            })
        );
        assert!(draft(&"n".repeat(100), "Frank Herbert", 1.0).is_ok());
        assert!(draft(&"n".repeat(101), "Frank Herbert", 1.0).is_err());
        assert_eq!(
            draft("Dune", &"a".repeat(51), 1.0),
            Err(BookError::Length {
                field: "author",
                max: 50,
                actual: 51
            })
        );

        let long_description = BookDraft::new(
            "Dune".to_string(),
            "d".repeat(1001),
            "Frank Herbert".to_string(),
            1.0,
            None,
        );
        assert!(matches!(
            long_description,
            Err(BookError::Length {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn test_price_must_be_positive_and_finite() {
        assert!(matches!(
            draft("Dune", "Frank Herbert", 0.0),
            Err(BookError::InvalidPrice(_))
        ));
        assert!(draft("Dune", "Frank Herbert", -5.0).is_err());
        assert!(draft("Dune", "Frank Herbert", f64::NAN).is_err());
        assert!(draft("Dune", "Frank Herbert", f64::INFINITY).is_err());
    }

    #[test]
    fn test_book_id_from_string() {
        assert_eq!(BookId::from_string("7"), Ok(BookId(7)));
        assert!(BookId::from_string("0").is_err());
        assert!(BookId::from_string("seven").is_err());
    }
}
