//! Quote creation, listing and deletion service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewQuote, Record};
use crate::domain::repositories::QuoteRepository;
use crate::error::AppError;

/// Service for managing quotes.
///
/// Ids come from the repository's atomic counter, so concurrent creations
/// never collide. A counter value consumed by a creation that later fails to
/// write is not reused.
pub struct QuoteService<R: QuoteRepository> {
    repository: Arc<R>,
}

impl<R: QuoteRepository> QuoteService<R> {
    /// Creates a new quote service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every quote registered in the `quotes` set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_quotes(&self) -> Result<Vec<Record>, AppError> {
        self.repository.list().await
    }

    /// Stores a new quote and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn add_quote(&self, new_quote: NewQuote) -> Result<u64, AppError> {
        let id = self.repository.next_id().await?;
        let record = new_quote.into_record(id);

        self.repository.save(id, &record).await?;

        metrics::counter!("quotes_added_total").increment(1);
        tracing::info!(quote_id = id, "quote added");

        Ok(id)
    }

    /// Deletes a quote by the id taken from the request path.
    ///
    /// An id that is not a canonical decimal (`abc`, `007`, `+1`) cannot name a
    /// stored quote and is reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no quote hash exists for `id`.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_quote(&self, id: &str) -> Result<(), AppError> {
        let not_found = || AppError::not_found("Citation introuvable", json!({ "id": id }));

        // Only the canonical form names a key: `007` or `+1` are not `quotes:7`.
        let numeric_id: u64 = id.parse().map_err(|_| not_found())?;
        if numeric_id.to_string() != id {
            return Err(not_found());
        }

        if !self.repository.exists(numeric_id).await? {
            return Err(not_found());
        }

        self.repository.delete(numeric_id).await?;

        metrics::counter!("quotes_deleted_total").increment(1);
        tracing::info!(quote_id = numeric_id, "quote deleted");

        Ok(())
    }
}
