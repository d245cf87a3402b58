use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::book::models::BookId;
use crate::domain::errors::DomainError;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::ports::OrderRepository;
use crate::domain::pagination::Page;
use crate::domain::user::models::UserId;
use crate::outbound::repositories::with_deadline;

pub struct PostgresOrderRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_order(row: &PgRow) -> Result<Order, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let user_id: i64 = row.try_get("user_id")?;
        let book_id: i64 = row.try_get("book_id")?;

        Ok(Order {
            id: OrderId(id),
            user_id: UserId(user_id),
            book_id: BookId(book_id),
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO orders (user_id, book_id)
                VALUES ($1, $2)
                RETURNING id, user_id, book_id, created_at
                "#,
            )
            .bind(order.user_id.0)
            .bind(order.book_id.0)
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_order(&row).map_err(DomainError::internal)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Order, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, user_id, book_id, created_at
                FROM orders
                WHERE id = $1
                "#,
            )
            .bind(id.0)
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_order(&row).map_err(DomainError::internal)
    }

    async fn list_by_user(&self, user_id: &UserId, page: Page) -> Result<Vec<Order>, DomainError> {
        let rows = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, user_id, book_id, created_at
                FROM orders
                WHERE user_id = $1
                ORDER BY id
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(user_id.0)
            .bind(page.limit())
            .bind(page.skip())
            .fetch_all(&self.pool),
        )
        .await?;

        rows.iter()
            .map(|row| Self::row_to_order(row).map_err(DomainError::internal))
            .collect()
    }
}
