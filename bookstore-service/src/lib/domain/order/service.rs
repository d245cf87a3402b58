use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookRepository;
use crate::domain::errors::DomainError;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderId;
use crate::domain::order::ports::OrderRepository;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::pagination::Page;
use crate::domain::user::models::UserId;

/// Domain service implementation for order operations.
///
/// Needs the book store to confirm a book exists before ordering it.
pub struct OrderService<OR, BR>
where
    OR: OrderRepository,
    BR: BookRepository,
{
    orders: Arc<OR>,
    books: Arc<BR>,
}

impl<OR, BR> OrderService<OR, BR>
where
    OR: OrderRepository,
    BR: BookRepository,
{
    pub fn new(orders: Arc<OR>, books: Arc<BR>) -> Self {
        Self { orders, books }
    }
}

#[async_trait]
impl<OR, BR> OrderServicePort for OrderService<OR, BR>
where
    OR: OrderRepository,
    BR: BookRepository,
{
    async fn create_order(
        &self,
        user_id: &UserId,
        book_id: &BookId,
    ) -> Result<Order, DomainError> {
        let book = self.books.find_by_id(book_id).await?;

        let order = self
            .orders
            .create(NewOrder {
                user_id: *user_id,
                book_id: book.id,
            })
            .await?;

        tracing::info!(order_id = %order.id, user_id = %user_id, book_id = %book.id, "Order placed");

        Ok(order)
    }

    async fn get_order(&self, user_id: &UserId, id: &OrderId) -> Result<Order, DomainError> {
        let order = self.orders.find_by_id(id).await?;

        // Other users' orders are reported as absent.
        if order.user_id != *user_id {
            return Err(DomainError::DataNotFound);
        }

        Ok(order)
    }

    async fn list_orders(&self, user_id: &UserId, page: Page) -> Result<Vec<Order>, DomainError> {
        self.orders.list_by_user(user_id, page).await
    }
}
