//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern and are
//! implemented over the key-value store gateway in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User listing, creation and seeding checks
//! - [`QuoteRepository`] - Quote CRUD, id assignment and text scans

pub mod quote_repository;
pub mod user_repository;

pub use quote_repository::QuoteRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use quote_repository::MockQuoteRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
