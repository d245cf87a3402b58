pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod register_user;
pub mod update_user;

pub use delete_user::delete_user;
pub use get_user::get_user;
pub use list_users::list_users;
pub use register_user::register_user;
pub use update_user::update_user;
