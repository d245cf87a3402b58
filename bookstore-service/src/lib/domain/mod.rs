pub mod auth;
pub mod book;
pub mod errors;
pub mod order;
pub mod pagination;
pub mod user;
