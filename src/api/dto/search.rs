//! DTOs for the search endpoint.

use serde::Deserialize;

/// Query string of `GET /search`.
///
/// A missing `keyword` deserializes as empty and is rejected by the search service.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}
