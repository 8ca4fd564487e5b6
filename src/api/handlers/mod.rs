//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod quotes;
pub mod root;
pub mod search;
pub mod users;

pub use health::health_handler;
pub use quotes::{add_quote_handler, delete_quote_handler, list_quotes_handler};
pub use root::root_handler;
pub use search::search_handler;
pub use users::{add_user_handler, list_users_handler};
