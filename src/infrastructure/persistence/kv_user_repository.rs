//! Key-value store implementation of the user repository.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Record, USERS_SET, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::store::StoreGateway;

/// User repository over the shared [`StoreGateway`].
///
/// Layout: hash `users:{id}` per user, set `users` listing the hash keys.
pub struct KvUserRepository {
    store: Arc<dyn StoreGateway>,
}

impl KvUserRepository {
    /// Creates a new repository over a store gateway.
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn list(&self) -> Result<Vec<Record>, AppError> {
        let keys = self.store.set_members(USERS_SET).await?;
        let mut users = Vec::with_capacity(keys.len());

        for key in keys {
            let record = self.store.hash_get_all(&key).await?;
            if record.is_empty() {
                debug!(key, "user set member has no hash, skipping");
                continue;
            }
            users.push(record);
        }

        Ok(users)
    }

    async fn save(&self, user: &User) -> Result<(), AppError> {
        self.store
            .put_indexed_hash(USERS_SET, &user.key(), &user.fields)
            .await?;
        Ok(())
    }

    async fn is_populated(&self) -> Result<bool, AppError> {
        Ok(self.store.exists(USERS_SET).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::MemoryStore;

    fn user(id: &str, name: &str) -> User {
        let mut fields = Record::new();
        fields.insert("id".to_string(), id.to_string());
        fields.insert("name".to_string(), name.to_string());
        User::from_record(fields).unwrap()
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let store = Arc::new(MemoryStore::new());
        let repo = KvUserRepository::new(store.clone());

        assert!(!repo.is_populated().await.unwrap());

        repo.save(&user("1", "test_user")).await.unwrap();

        assert!(repo.is_populated().await.unwrap());
        assert_eq!(repo.list().await.unwrap(), vec![user("1", "test_user").fields]);
        assert_eq!(store.set_members(USERS_SET).await.unwrap(), vec!["users:1"]);
    }

    #[tokio::test]
    async fn test_orphan_hash_is_invisible() {
        let store = Arc::new(MemoryStore::new());
        let repo = KvUserRepository::new(store.clone());

        store
            .hash_set("users:9", &user("9", "orphan").fields)
            .await
            .unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }
}
