//! User listing and creation service.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::entities::{Record, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for reading and adding users.
///
/// Users are never updated in place or deleted; adding an existing id
/// overwrites the stored fields.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every user registered in the `users` set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_users(&self) -> Result<Vec<Record>, AppError> {
        let users = self.repository.list().await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }

    /// Stores a user from its payload fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is missing or empty; the
    /// repository is not called in that case.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn add_user(&self, fields: Record) -> Result<User, AppError> {
        let user =
            User::from_record(fields).ok_or_else(|| AppError::bad_request("ID requis", Value::Null))?;

        self.repository.save(&user).await?;

        metrics::counter!("users_added_total").increment(1);
        tracing::info!(user_id = %user.id, "user added");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_add_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_save()
            .withf(|user| user.id == "2" && user.fields.get("name").map(String::as_str) == Some("new_user"))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .add_user(record(&[("id", "2"), ("name", "new_user"), ("password", "new_password")]))
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().key(), "users:2");
    }

    #[tokio::test]
    async fn test_add_user_missing_id_never_touches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_save().times(0);
        mock_repo.expect_list().times(0);
        mock_repo.expect_is_populated().times(0);

        let service = UserService::new(Arc::new(mock_repo));

        for payload in [
            record(&[]),
            record(&[("name", "nobody")]),
            record(&[("id", ""), ("name", "blank")]),
        ] {
            let result = service.add_user(payload).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![record(&[
                ("id", "1"),
                ("name", "test_user"),
                ("password", "test_password"),
            ])])
        });

        let service = UserService::new(Arc::new(mock_repo));

        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].get("name").map(String::as_str), Some("test_user"));
    }

    #[tokio::test]
    async fn test_add_user_propagates_store_failure() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::internal("Erreur interne du serveur", Value::Null)));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.add_user(record(&[("id", "3")])).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
