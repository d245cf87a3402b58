use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::errors::DomainError;
use crate::domain::pagination::Page;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserRepository;
use crate::outbound::repositories::with_deadline;

pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        let id: i64 = row.try_get("id").map_err(DomainError::internal)?;
        let name: String = row.try_get("name").map_err(DomainError::internal)?;
        let email: String = row.try_get("email").map_err(DomainError::internal)?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(DomainError::internal)?;

        Ok(User {
            id: UserId(id),
            name: UserName::new(name).map_err(DomainError::internal)?,
            email: EmailAddress::new(email).map_err(DomainError::internal)?,
            password_hash,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                INSERT INTO users (name, email, password_hash)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, password_hash
                "#,
            )
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(&user.password_hash)
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_user(&row)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, name, email, password_hash
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id.0)
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_user(&row)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, name, email, password_hash
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str())
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_user(&row)
    }

    async fn list(&self, page: Page) -> Result<Vec<User>, DomainError> {
        let rows = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                SELECT id, name, email, password_hash
                FROM users
                ORDER BY id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(page.limit())
            .bind(page.skip())
            .fetch_all(&self.pool),
        )
        .await?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let row = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                UPDATE users
                SET name = $2, email = $3, password_hash = $4, updated_at = NOW()
                WHERE id = $1
                RETURNING id, name, email, password_hash
                "#,
            )
            .bind(user.id.0)
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(&user.password_hash)
            .fetch_one(&self.pool),
        )
        .await?;

        Self::row_to_user(&row)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let result = with_deadline(
            self.query_timeout,
            sqlx::query(
                r#"
                DELETE FROM users
                WHERE id = $1
                "#,
            )
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
