use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::book::models::BookId;
use crate::domain::order::errors::OrderIdError;
use crate::domain::user::models::UserId;

/// A purchase of one book by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub book_id: BookId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(pub i64);

impl OrderId {
    /// Parse an order ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, OrderIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(OrderId(id)),
            Ok(id) => Err(OrderIdError::InvalidFormat(format!(
                "expected a positive integer, got {}",
                id
            ))),
            Err(e) => Err(OrderIdError::InvalidFormat(e.to_string())),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Order row to insert; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub book_id: BookId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_from_string() {
        assert_eq!(OrderId::from_string("12"), Ok(OrderId(12)));
        assert!(OrderId::from_string("-12").is_err());
        assert!(OrderId::from_string("").is_err());
    }
}
