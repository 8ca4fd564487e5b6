//! Store gateway trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Record;

/// Errors that can occur while talking to the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
            Self::Connection(e.to_string())
        } else {
            Self::Operation(e.to_string())
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Primitives every resource handler is built on: set membership,
/// hash read/write, an atomic counter and key existence.
///
/// No transactional guarantee spans two calls. Callers that need
/// "hash write + set add" (or the reverse for deletion) to land together
/// use [`StoreGateway::put_indexed_hash`] and
/// [`StoreGateway::remove_indexed_hash`], which implementations execute
/// as one atomic batch.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis with `MULTI/EXEC` batches
/// - [`crate::infrastructure::store::MemoryStore`] - single-lock in-process map
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Adds `member` to the set at `set_key`. Idempotent.
    async fn set_add(&self, set_key: &str, member: &str) -> StoreResult<()>;

    /// Returns every member of the set, or an empty vector if the key is absent.
    ///
    /// Order is the store's iteration order and is not guaranteed stable.
    async fn set_members(&self, set_key: &str) -> StoreResult<Vec<String>>;

    /// Removes `member` from the set at `set_key`.
    async fn set_remove(&self, set_key: &str, member: &str) -> StoreResult<()>;

    /// Creates or overwrites fields of the hash at `hash_key`.
    ///
    /// Fields not present in `fields` are left untouched. An empty mapping is a no-op.
    async fn hash_set(&self, hash_key: &str, fields: &Record) -> StoreResult<()>;

    /// Returns all fields of the hash, or an empty mapping if the key is absent.
    async fn hash_get_all(&self, hash_key: &str) -> StoreResult<Record>;

    /// Returns a single hash field.
    async fn hash_get_field(&self, hash_key: &str, field: &str) -> StoreResult<Option<String>>;

    /// Checks whether the hash at `hash_key` exists.
    async fn hash_exists(&self, hash_key: &str) -> StoreResult<bool>;

    /// Removes the entire hash.
    async fn hash_delete(&self, hash_key: &str) -> StoreResult<()>;

    /// Atomically increments the counter and returns the post-increment value.
    ///
    /// A fresh counter yields `1`.
    async fn increment(&self, counter_key: &str) -> StoreResult<i64>;

    /// Checks whether any value is stored under `key`.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Writes the hash and registers its key in the membership set as one batch.
    async fn put_indexed_hash(
        &self,
        set_key: &str,
        hash_key: &str,
        fields: &Record,
    ) -> StoreResult<()>;

    /// Deletes the hash and drops its key from the membership set as one batch.
    async fn remove_indexed_hash(&self, set_key: &str, hash_key: &str) -> StoreResult<()>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health endpoint and the admin CLI.
    async fn health_check(&self) -> bool;
}
