//! Repository trait for quotes.

use crate::domain::entities::Record;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for quote records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvQuoteRepository`] - key-value store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Returns the hash of every quote registered in the `quotes` set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<Record>, AppError>;

    /// Reserves the next quote id from the shared counter.
    ///
    /// Concurrent callers never receive the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn next_id(&self) -> Result<u64, AppError>;

    /// Writes the quote hash and registers it in the `quotes` set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn save(&self, id: u64, record: &Record) -> Result<(), AppError>;

    /// Checks whether a quote hash exists for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn exists(&self, id: u64) -> Result<bool, AppError>;

    /// Deletes the quote hash and removes it from the `quotes` set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: u64) -> Result<(), AppError>;

    /// Returns the `quote` field of every registered quote, in set iteration
    /// order. Members whose hash has no `quote` field are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn quote_texts(&self) -> Result<Vec<String>, AppError>;
}
