use std::future::Future;
use std::time::Duration;

use crate::domain::errors::DomainError;

pub mod book;
pub mod order;
pub mod user;

pub use book::PostgresBookRepository;
pub use order::PostgresOrderRepository;
pub use user::PostgresUserRepository;

/// Translate a driver failure into the domain taxonomy.
///
/// This is the only place that inspects driver errors.
pub fn map_store_error(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::DataNotFound,
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            DomainError::ConflictingData
        }
        other => DomainError::internal(other),
    }
}

/// Run a query under a deadline. Expiry is `Internal`.
pub async fn with_deadline<T, F>(deadline: Duration, query: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(deadline, query).await {
        Ok(result) => result.map_err(map_store_error),
        Err(_) => Err(DomainError::internal(format!(
            "query exceeded deadline of {:?}",
            deadline
        ))),
    }
}
