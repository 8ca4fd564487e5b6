//! Keyword search over stored quotes.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::repositories::QuoteRepository;
use crate::error::AppError;

/// The one search operation behind every `GET /search` route.
///
/// Performs a linear scan of the `quotes` set and a case-insensitive
/// substring match on each quote's text.
pub struct SearchService<R: QuoteRepository> {
    repository: Arc<R>,
}

impl<R: QuoteRepository> SearchService<R> {
    /// Creates a new search service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the text of every quote containing `keyword`, ignoring case,
    /// in the order the store yields them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `keyword` is empty.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn search(&self, keyword: &str) -> Result<Vec<String>, AppError> {
        if keyword.is_empty() {
            return Err(AppError::bad_request("Mot-clé requis", Value::Null));
        }

        let needle = keyword.to_lowercase();
        let matches: Vec<String> = self
            .repository
            .quote_texts()
            .await?
            .into_iter()
            .filter(|text| text.to_lowercase().contains(&needle))
            .collect();

        metrics::counter!("searches_total").increment(1);
        tracing::debug!(keyword, hits = matches.len(), "quote search");

        Ok(matches)
    }
}
