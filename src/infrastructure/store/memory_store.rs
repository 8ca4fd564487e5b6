//! In-process store gateway for local development and tests.

use super::service::{StoreError, StoreGateway, StoreResult};
use crate::domain::entities::Record;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Keyspace {
    sets: HashMap<String, BTreeSet<String>>,
    hashes: HashMap<String, Record>,
    counters: HashMap<String, i64>,
}

impl Keyspace {
    fn key_exists(&self, key: &str) -> bool {
        self.sets.contains_key(key) || self.hashes.contains_key(key) || self.counters.contains_key(key)
    }

    fn write_hash(&mut self, hash_key: &str, fields: &Record) {
        if fields.is_empty() {
            return;
        }
        let hash = self.hashes.entry(hash_key.to_string()).or_default();
        for (k, v) in fields {
            hash.insert(k.clone(), v.clone());
        }
    }

    fn add_member(&mut self, set_key: &str, member: &str) {
        self.sets
            .entry(set_key.to_string())
            .or_default()
            .insert(member.to_string());
    }

    // An emptied set disappears, mirroring Redis.
    fn remove_member(&mut self, set_key: &str, member: &str) {
        if let Some(set) = self.sets.get_mut(set_key) {
            set.remove(member);
            if set.is_empty() {
                self.sets.remove(set_key);
            }
        }
    }
}

/// A [`StoreGateway`] kept entirely in process memory.
///
/// Every operation takes one lock over the whole keyspace, so increments and
/// indexed batches are atomic with respect to each other. Set members iterate
/// in lexical order, which keeps listings deterministic in tests.
///
/// Nothing is persisted; state is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Keyspace>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (nothing is persisted)");
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Keyspace>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Operation("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl StoreGateway for MemoryStore {
    async fn set_add(&self, set_key: &str, member: &str) -> StoreResult<()> {
        self.lock()?.add_member(set_key, member);
        Ok(())
    }

    async fn set_members(&self, set_key: &str) -> StoreResult<Vec<String>> {
        Ok(self
            .lock()?
            .sets
            .get(set_key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn set_remove(&self, set_key: &str, member: &str) -> StoreResult<()> {
        self.lock()?.remove_member(set_key, member);
        Ok(())
    }

    async fn hash_set(&self, hash_key: &str, fields: &Record) -> StoreResult<()> {
        self.lock()?.write_hash(hash_key, fields);
        Ok(())
    }

    async fn hash_get_all(&self, hash_key: &str) -> StoreResult<Record> {
        Ok(self
            .lock()?
            .hashes
            .get(hash_key)
            .cloned()
            .unwrap_or_default())
    }

    async fn hash_get_field(&self, hash_key: &str, field: &str) -> StoreResult<Option<String>> {
        Ok(self
            .lock()?
            .hashes
            .get(hash_key)
            .and_then(|hash| hash.get(field).cloned()))
    }

    async fn hash_exists(&self, hash_key: &str) -> StoreResult<bool> {
        Ok(self.lock()?.hashes.contains_key(hash_key))
    }

    async fn hash_delete(&self, hash_key: &str) -> StoreResult<()> {
        self.lock()?.hashes.remove(hash_key);
        Ok(())
    }

    async fn increment(&self, counter_key: &str) -> StoreResult<i64> {
        let mut keyspace = self.lock()?;
        let counter = keyspace.counters.entry(counter_key.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.lock()?.key_exists(key))
    }

    async fn put_indexed_hash(
        &self,
        set_key: &str,
        hash_key: &str,
        fields: &Record,
    ) -> StoreResult<()> {
        let mut keyspace = self.lock()?;
        keyspace.write_hash(hash_key, fields);
        keyspace.add_member(set_key, hash_key);
        Ok(())
    }

    async fn remove_indexed_hash(&self, set_key: &str, hash_key: &str) -> StoreResult<()> {
        let mut keyspace = self.lock()?;
        keyspace.hashes.remove(hash_key);
        keyspace.remove_member(set_key, hash_key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.inner.lock().is_ok()
    }
}
