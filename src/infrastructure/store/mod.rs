//! Key-value store gateway shared by every HTTP surface.
//!
//! Provides a [`StoreGateway`] trait with two implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process store for local development and tests

mod memory_store;
mod redis_store;
mod service;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
pub use service::{StoreError, StoreGateway, StoreResult};
