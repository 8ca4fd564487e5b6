//! Key-value store implementation of the quote repository.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{QUOTES_COUNTER, QUOTES_SET, Record, quote_key};
use crate::domain::repositories::QuoteRepository;
use crate::error::{AppError, INTERNAL_MESSAGE};
use crate::infrastructure::store::StoreGateway;

/// Quote repository over the shared [`StoreGateway`].
///
/// Layout: hash `quotes:{id}` per quote, set `quotes` listing the hash keys,
/// counter `quotes_counter` holding the last assigned id.
pub struct KvQuoteRepository {
    store: Arc<dyn StoreGateway>,
}

impl KvQuoteRepository {
    /// Creates a new repository over a store gateway.
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl QuoteRepository for KvQuoteRepository {
    async fn list(&self) -> Result<Vec<Record>, AppError> {
        let keys = self.store.set_members(QUOTES_SET).await?;
        let mut quotes = Vec::with_capacity(keys.len());

        for key in keys {
            let record = self.store.hash_get_all(&key).await?;
            if record.is_empty() {
                debug!(key, "quote set member has no hash, skipping");
                continue;
            }
            quotes.push(record);
        }

        Ok(quotes)
    }

    async fn next_id(&self) -> Result<u64, AppError> {
        let value = self.store.increment(QUOTES_COUNTER).await?;

        u64::try_from(value).map_err(|_| {
            tracing::error!(value, "quote counter returned a negative value");
            AppError::internal(INTERNAL_MESSAGE, Value::Null)
        })
    }

    async fn save(&self, id: u64, record: &Record) -> Result<(), AppError> {
        self.store
            .put_indexed_hash(QUOTES_SET, &quote_key(id), record)
            .await?;
        Ok(())
    }

    async fn exists(&self, id: u64) -> Result<bool, AppError> {
        Ok(self.store.hash_exists(&quote_key(id)).await?)
    }

    async fn delete(&self, id: u64) -> Result<(), AppError> {
        self.store
            .remove_indexed_hash(QUOTES_SET, &quote_key(id))
            .await?;
        Ok(())
    }

    async fn quote_texts(&self) -> Result<Vec<String>, AppError> {
        let keys = self.store.set_members(QUOTES_SET).await?;
        let mut texts = Vec::with_capacity(keys.len());

        for key in keys {
            if let Some(text) = self.store.hash_get_field(&key, "quote").await? {
                texts.push(text);
            }
        }

        Ok(texts)
    }
}
