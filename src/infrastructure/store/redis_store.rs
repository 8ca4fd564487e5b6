//! Redis-backed store gateway.

use super::service::{StoreError, StoreGateway, StoreResult};
use crate::domain::entities::Record;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis implementation of [`StoreGateway`].
///
/// Holds a single `ConnectionManager` for the lifetime of the process; each call
/// clones the manager, which multiplexes over the same underlying connection and
/// reconnects transparently after a drop.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }

    fn conn(&self) -> ConnectionManager {
        self.client.clone()
    }
}

fn as_pairs(fields: &Record) -> Vec<(&str, &str)> {
    fields
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[async_trait]
impl StoreGateway for RedisStore {
    async fn set_add(&self, set_key: &str, member: &str) -> StoreResult<()> {
        self.conn().sadd::<_, _, ()>(set_key, member).await?;
        Ok(())
    }

    async fn set_members(&self, set_key: &str) -> StoreResult<Vec<String>> {
        let members = self.conn().smembers::<_, Vec<String>>(set_key).await?;
        debug!(set_key, count = members.len(), "SMEMBERS");
        Ok(members)
    }

    async fn set_remove(&self, set_key: &str, member: &str) -> StoreResult<()> {
        self.conn().srem::<_, _, ()>(set_key, member).await?;
        Ok(())
    }

    async fn hash_set(&self, hash_key: &str, fields: &Record) -> StoreResult<()> {
        if fields.is_empty() {
            return Ok(());
        }
        self.conn()
            .hset_multiple::<_, _, _, ()>(hash_key, &as_pairs(fields))
            .await?;
        Ok(())
    }

    async fn hash_get_all(&self, hash_key: &str) -> StoreResult<Record> {
        Ok(self.conn().hgetall::<_, Record>(hash_key).await?)
    }

    async fn hash_get_field(&self, hash_key: &str, field: &str) -> StoreResult<Option<String>> {
        Ok(self
            .conn()
            .hget::<_, _, Option<String>>(hash_key, field)
            .await?)
    }

    async fn hash_exists(&self, hash_key: &str) -> StoreResult<bool> {
        self.exists(hash_key).await
    }

    async fn hash_delete(&self, hash_key: &str) -> StoreResult<()> {
        self.conn().del::<_, ()>(hash_key).await?;
        Ok(())
    }

    async fn increment(&self, counter_key: &str) -> StoreResult<i64> {
        let value = self.conn().incr::<_, _, i64>(counter_key, 1).await?;
        debug!(counter_key, value, "INCR");
        Ok(value)
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.conn().exists::<_, bool>(key).await?)
    }

    async fn put_indexed_hash(
        &self,
        set_key: &str,
        hash_key: &str,
        fields: &Record,
    ) -> StoreResult<()> {
        let mut pipe = redis::pipe();
        pipe.atomic();
        if !fields.is_empty() {
            pipe.hset_multiple(hash_key, &as_pairs(fields)).ignore();
        }
        pipe.sadd(set_key, hash_key).ignore();

        pipe.query_async::<()>(&mut self.conn()).await?;
        debug!(set_key, hash_key, "MULTI HSET+SADD");
        Ok(())
    }

    async fn remove_indexed_hash(&self, set_key: &str, hash_key: &str) -> StoreResult<()> {
        redis::pipe()
            .atomic()
            .del(hash_key)
            .ignore()
            .srem(set_key, hash_key)
            .ignore()
            .query_async::<()>(&mut self.conn())
            .await?;
        debug!(set_key, hash_key, "MULTI DEL+SREM");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.conn().ping::<()>().await.is_ok()
    }
}
