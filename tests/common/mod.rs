#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use citations::config::ServiceKind;
use citations::domain::entities::Record;
use citations::infrastructure::store::{MemoryStore, StoreError, StoreGateway, StoreResult};
use citations::routes::router;
use citations::state::AppState;
use std::sync::Arc;

pub const TEST_KEY: &str = "default_key";

pub fn auth_header() -> HeaderValue {
    HeaderValue::from_static(TEST_KEY)
}

pub fn create_test_state(store: Arc<dyn StoreGateway>) -> AppState {
    AppState::new(store, TEST_KEY)
}

/// Server mounting `service` over a fresh in-memory store.
///
/// The store is returned too, so tests can inspect side effects directly.
pub fn create_test_server(service: ServiceKind) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = create_test_state(store.clone());
    let server = TestServer::new(router(state, service)).unwrap();
    (server, store)
}

pub fn create_failing_server() -> TestServer {
    let state = create_test_state(Arc::new(FailingStore));
    TestServer::new(router(state, ServiceKind::All)).unwrap()
}

pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Store whose every operation fails as if Redis had gone away.
pub struct FailingStore;

fn refused<T>() -> StoreResult<T> {
    Err(StoreError::Connection(
        "redis://:hunter2@10.0.0.5:6379 connection refused".to_string(),
    ))
}

#[async_trait]
impl StoreGateway for FailingStore {
    async fn set_add(&self, _set_key: &str, _member: &str) -> StoreResult<()> {
        refused()
    }

    async fn set_members(&self, _set_key: &str) -> StoreResult<Vec<String>> {
        refused()
    }

    async fn set_remove(&self, _set_key: &str, _member: &str) -> StoreResult<()> {
        refused()
    }

    async fn hash_set(&self, _hash_key: &str, _fields: &Record) -> StoreResult<()> {
        refused()
    }

    async fn hash_get_all(&self, _hash_key: &str) -> StoreResult<Record> {
        refused()
    }

    async fn hash_get_field(&self, _hash_key: &str, _field: &str) -> StoreResult<Option<String>> {
        refused()
    }

    async fn hash_exists(&self, _hash_key: &str) -> StoreResult<bool> {
        refused()
    }

    async fn hash_delete(&self, _hash_key: &str) -> StoreResult<()> {
        refused()
    }

    async fn increment(&self, _counter_key: &str) -> StoreResult<i64> {
        refused()
    }

    async fn exists(&self, _key: &str) -> StoreResult<bool> {
        refused()
    }

    async fn put_indexed_hash(
        &self,
        _set_key: &str,
        _hash_key: &str,
        _fields: &Record,
    ) -> StoreResult<()> {
        refused()
    }

    async fn remove_indexed_hash(&self, _set_key: &str, _hash_key: &str) -> StoreResult<()> {
        refused()
    }

    async fn health_check(&self) -> bool {
        false
    }
}
