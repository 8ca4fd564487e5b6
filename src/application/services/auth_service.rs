//! Shared-secret authentication for guarded routes.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Checks the admin key presented by a request.
///
/// There is exactly one credential per process, read from `ADMIN_KEY` at
/// startup. Keys are compared through their SHA-256 digests so the comparison
/// time does not depend on how many leading bytes match.
pub struct AuthService {
    key_digest: [u8; 32],
}

impl AuthService {
    /// Creates a guard for the given admin key.
    pub fn new(admin_key: &str) -> Self {
        Self {
            key_digest: digest(admin_key),
        }
    }

    /// Authorizes a request given the raw `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the header is missing or does not
    /// match the configured key.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), AppError> {
        match presented {
            Some(key) if digest(key) == self.key_digest => Ok(()),
            _ => Err(AppError::unauthorized("Unauthorized", Value::Null)),
        }
    }
}

fn digest(key: &str) -> [u8; 32] {
    Sha256::digest(key.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_matching_key() {
        let service = AuthService::new("default_key");

        assert!(service.authorize(Some("default_key")).is_ok());
    }

    #[test]
    fn test_authorize_missing_key() {
        let service = AuthService::new("default_key");

        let result = service.authorize(None);

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_authorize_wrong_key() {
        let service = AuthService::new("default_key");

        assert!(service.authorize(Some("default_ke")).is_err());
        assert!(service.authorize(Some("default_key ")).is_err());
        assert!(service.authorize(Some("")).is_err());
    }

    #[test]
    fn test_authorize_is_case_sensitive() {
        let service = AuthService::new("Secret");

        assert!(service.authorize(Some("secret")).is_err());
    }
}
