//! Repository implementations over the key-value store gateway.
//!
//! # Repositories
//!
//! - [`KvUserRepository`] - User hashes and the `users` membership set
//! - [`KvQuoteRepository`] - Quote hashes, the `quotes` set and the id counter

pub mod kv_quote_repository;
pub mod kv_user_repository;

pub use kv_quote_repository::KvQuoteRepository;
pub use kv_user_repository::KvUserRepository;
