pub mod create_order;
pub mod get_order;
pub mod list_orders;

pub use create_order::create_order;
pub use get_order::get_order;
pub use list_orders::list_orders;
