//! Handler for keyword search.

use axum::{Json, extract::State};

use crate::api::dto::search::SearchQuery;
use crate::api::extract::QueryParams;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the text of every quote containing the keyword, ignoring case.
///
/// # Endpoint
///
/// `GET /search?keyword=K`
///
/// Mounted by both the quotes and the search surfaces; both delegate to the
/// same [`crate::application::services::SearchService`].
///
/// # Errors
///
/// Returns 400 Bad Request if `keyword` is missing or empty.
#[utoipa::path(
    get, path = "/search", tag = "search",
    security(("admin_key" = [])),
    params(("keyword" = String, Query, description = "Case-insensitive substring")),
    responses(
        (status = 200, description = "Matching quote texts", body = Vec<String>),
        (status = 400, description = "Missing or empty keyword", body = crate::api::openapi::ErrorDoc),
        (status = 401, description = "Missing or wrong admin key", body = crate::api::openapi::ErrorDoc)
    )
)]
pub async fn search_handler(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let results = state.search_service.search(&query.keyword).await?;
    Ok(Json(results))
}
