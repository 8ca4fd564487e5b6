//! Core entities stored in the key-value store.
//!
//! Both entity kinds are flat string hashes referenced from a membership set:
//!
//! - [`User`] - hash `users:{id}`, member of set `users`
//! - [`NewQuote`] - input for a hash `quotes:{id}`, member of set `quotes`
//!
//! Listings return raw [`Record`]s because payloads may carry arbitrary
//! extra fields that are stored and returned as-is.

pub mod quote;
pub mod record;
pub mod user;

pub use quote::{NewQuote, QUOTES_COUNTER, QUOTES_SET, quote_key};
pub use record::{NestedFieldError, Record, record_from_json};
pub use user::{USERS_SET, User, user_key};
