use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::book::models::Book;
use crate::domain::book::models::BookDraft;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::errors::DomainError;
use crate::domain::pagination::Page;
use crate::outbound::repositories::with_deadline;

pub struct PostgresBookRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_book(row: &PgRow) -> Result<Book, DomainError> {
        let id: i64 = row.try_get("id").map_err(DomainError::internal)?;
        let name: String = row.try_get("name").map_err(DomainError::internal)?;
        let description: String = row.try_get("description").map_err(DomainError::internal)?;
        let author: String = row.try_get("author").map_err(DomainError::internal)?;
        let price: f64 = row.try_get("price").map_err(DomainError::internal)?;
        let cover: Option<String> = row.try_get("cover").map_err(DomainError::internal)?;

        let draft = BookDraft::new(name, description, author, price, cover)
            .map_err(DomainError::internal)?;

        Ok(Book::from_draft(BookId(id), draft))
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, draft: BookDraft) -> Result<Book, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO books (name, description, author, price, cover)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, description, author, price, cover
                "#,
            )
            .bind(draft.name())
            .bind(draft.description())
            .bind(draft.author())
            .bind(draft.price())
            .bind(draft.cover())
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_book(&row)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Book, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, name, description, author, price, cover
                FROM books
                WHERE id = $1
                "#,
            )
            .bind(id.0)
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_book(&row)
    }

    async fn list(&self, page: Page) -> Result<Vec<Book>, DomainError> {
        let rows = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, name, description, author, price, cover
                FROM books
                ORDER BY id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(page.limit())
            .bind(page.skip())
            .fetch_all(&self.pool),
        )
        .await?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn update(&self, id: &BookId, draft: BookDraft) -> Result<Book, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                UPDATE books
                SET name = $2, description = $3, author = $4, price = $5, cover = $6,
                    updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, description, author, price, cover
                "#,
            )
            .bind(id.0)
            .bind(draft.name())
            .bind(draft.description())
            .bind(draft.author())
            .bind(draft.price())
            .bind(draft.cover())
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_book(&row)
    }

    async fn delete(&self, id: &BookId) -> Result<(), DomainError> {
        let result = with_deadline(
            self.query_timeout,
            sqlx::query("DELETE FROM books WHERE id = $1")
                .bind(id.0)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DataNotFound);
        }

        Ok(())
    }
}
