//! Handlers for quote management endpoints (list, create, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::message::{MessageResponse, QuoteCreatedResponse};
use crate::api::dto::quotes::AddQuoteRequest;
use crate::api::extract::JsonBody;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored quote.
///
/// # Endpoint
///
/// `GET /quotes`
#[utoipa::path(
    get, path = "/quotes", tag = "quotes",
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "Every stored quote", body = Vec<crate::api::openapi::QuoteDoc>),
        (status = 401, description = "Missing or wrong admin key", body = crate::api::openapi::ErrorDoc)
    )
)]
pub async fn list_quotes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let quotes = state.quote_service.list_quotes().await?;
    Ok(Json(quotes))
}

/// Stores a quote under the next counter value.
///
/// # Endpoint
///
/// `POST /quotes`
///
/// # Request Body
///
/// ```json
/// { "user_id": "1", "quote": "Mille millions de mille sabords !" }
/// ```
///
/// `user_id` is not checked against stored users.
///
/// # Response
///
/// ```json
/// { "message": "Citation ajoutée", "id": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `user_id` or `quote` is missing or empty.
#[utoipa::path(
    post, path = "/quotes", tag = "quotes",
    security(("admin_key" = [])),
    request_body = crate::api::openapi::AddQuoteDoc,
    responses(
        (status = 201, description = "Quote stored", body = crate::api::openapi::QuoteCreatedDoc),
        (status = 400, description = "Missing user_id or quote", body = crate::api::openapi::ErrorDoc),
        (status = 401, description = "Missing or wrong admin key", body = crate::api::openapi::ErrorDoc)
    )
)]
pub async fn add_quote_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddQuoteRequest>,
) -> Result<(StatusCode, Json<QuoteCreatedResponse>), AppError> {
    let new_quote = payload.into_new_quote()?;

    let id = state.quote_service.add_quote(new_quote).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuoteCreatedResponse {
            message: "Citation ajoutée",
            id,
        }),
    ))
}

/// Deletes a quote and its `quotes` set membership.
///
/// # Endpoint
///
/// `DELETE /quotes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no quote exists for `id`, including on a second
/// delete of the same id.
#[utoipa::path(
    delete, path = "/quotes/{id}", tag = "quotes",
    security(("admin_key" = [])),
    params(("id" = String, Path, description = "Quote id")),
    responses(
        (status = 200, description = "Quote deleted", body = crate::api::openapi::MessageDoc),
        (status = 401, description = "Missing or wrong admin key", body = crate::api::openapi::ErrorDoc),
        (status = 404, description = "No such quote", body = crate::api::openapi::ErrorDoc)
    )
)]
pub async fn delete_quote_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.quote_service.delete_quote(&id).await?;

    Ok(Json(MessageResponse::new("Citation supprimée")))
}
