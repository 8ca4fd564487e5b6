//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer on top of the
//! shared key-value store.
//!
//! # Modules
//!
//! - [`store`] - Store gateway abstraction (Redis and in-memory implementations)
//! - [`persistence`] - Repository implementations over the store gateway

pub mod persistence;
pub mod store;
