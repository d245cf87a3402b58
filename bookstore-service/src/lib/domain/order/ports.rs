use async_trait::async_trait;

use crate::domain::book::models::BookId;
use crate::domain::errors::DomainError;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::pagination::Page;
use crate::domain::user::models::UserId;

/// Port for order operations on behalf of an authenticated user.
#[async_trait]
pub trait OrderServicePort: Send + Sync + 'static {
    /// Place an order for a book.
    ///
    /// # Arguments
    /// * `user_id` - Authenticated buyer
    /// * `book_id` - Book to order
    ///
    /// # Errors
    /// * `DataNotFound` - Book does not exist
    /// * `Internal` - Storage failed
    async fn create_order(&self, user_id: &UserId, book_id: &BookId)
        -> Result<Order, DomainError>;

    /// Retrieve one of the user's orders.
    ///
    /// # Errors
    /// * `DataNotFound` - Order does not exist or belongs to another user
    /// * `Internal` - Storage failed
    async fn get_order(&self, user_id: &UserId, id: &OrderId) -> Result<Order, DomainError>;

    /// List the user's orders, newest id last.
    async fn list_orders(&self, user_id: &UserId, page: Page) -> Result<Vec<Order>, DomainError>;
}

/// Persistence operations for order aggregate.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    async fn find_by_id(&self, id: &OrderId) -> Result<Order, DomainError>;

    async fn list_by_user(&self, user_id: &UserId, page: Page) -> Result<Vec<Order>, DomainError>;
}
