//! Repository trait for users.

use crate::domain::entities::{Record, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvUserRepository`] - key-value store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the hash of every user registered in the `users` set.
    ///
    /// Order follows the store's set iteration and is not stable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<Record>, AppError>;

    /// Writes the user hash and registers it in the `users` set.
    ///
    /// An existing user with the same id is overwritten field by field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn save(&self, user: &User) -> Result<(), AppError>;

    /// Whether the `users` set exists at all.
    ///
    /// Used by the bootstrap loader to decide whether seeding is needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn is_populated(&self) -> Result<bool, AppError>;
}
