//! Confirmation bodies returned by mutating endpoints.

use serde::Serialize;

/// `{"message": ...}` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Body returned after a quote is stored.
#[derive(Debug, Serialize)]
pub struct QuoteCreatedResponse {
    pub message: &'static str,
    pub id: u64,
}
