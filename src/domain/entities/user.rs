//! User entity.

use super::record::Record;

/// Membership set listing every visible user hash key.
pub const USERS_SET: &str = "users";

/// A user as stored under `users:{id}`.
///
/// The record holds every field of the payload it was created from, `id`
/// included. `password` is kept in cleartext: nothing in this service hashes
/// it, and anyone able to call `GET /users` or read the store sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub fields: Record,
}

impl User {
    /// Builds a user from a record, requiring a non-empty `id` field.
    ///
    /// Returns `None` when `id` is absent or empty.
    pub fn from_record(fields: Record) -> Option<Self> {
        let id = fields.get("id").filter(|id| !id.is_empty())?.clone();
        Some(Self { id, fields })
    }

    /// Key of the hash holding this user.
    pub fn key(&self) -> String {
        user_key(&self.id)
    }
}

/// Returns the hash key for a user id.
pub fn user_key(id: &str) -> String {
    format!("users:{}", id)
}
