//! Handlers for user endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Map, Value};

use crate::api::dto::message::MessageResponse;
use crate::api::extract::JsonBody;
use crate::domain::entities::{Record, record_from_json};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered user.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Response
///
/// An array of user objects with all stored fields, `password` included.
/// Order is not stable between calls.
#[utoipa::path(
    get, path = "/users", tag = "users",
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "Every registered user", body = Vec<crate::api::openapi::UserDoc>),
        (status = 401, description = "Missing or wrong admin key", body = crate::api::openapi::ErrorDoc)
    )
)]
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Adds (or overwrites) a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "id": "2", "name": "new_user", "password": "new_password" }
/// ```
///
/// Any other scalar fields are stored as well.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is missing or the body is not a flat JSON object.
#[utoipa::path(
    post, path = "/users", tag = "users",
    security(("admin_key" = [])),
    request_body = crate::api::openapi::UserDoc,
    responses(
        (status = 201, description = "User stored", body = crate::api::openapi::MessageDoc),
        (status = 400, description = "Missing id or invalid body", body = crate::api::openapi::ErrorDoc),
        (status = 401, description = "Missing or wrong admin key", body = crate::api::openapi::ErrorDoc)
    )
)]
pub async fn add_user_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Map<String, Value>>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let fields = record_from_json(payload)?;

    state.user_service.add_user(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Utilisateur ajouté")),
    ))
}
