//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User listing and creation
//! - [`services::quote_service::QuoteService`] - Quote creation, listing and deletion
//! - [`services::search_service::SearchService`] - Keyword search shared by every surface
//! - [`services::auth_service::AuthService`] - Shared admin key check
//!
//! [`bootstrap`] seeds the user set from a CSV file before the server starts.

pub mod bootstrap;
pub mod services;
