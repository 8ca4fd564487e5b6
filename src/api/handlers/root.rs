//! Public greeting endpoint.

use axum::Json;

use crate::api::dto::message::MessageResponse;

/// `GET /`: always answers, no authentication.
#[utoipa::path(
    get, path = "/", tag = "meta",
    responses((status = 200, description = "Greeting", body = crate::api::openapi::MessageDoc))
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World!"))
}
