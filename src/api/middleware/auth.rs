//! Shared admin key middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Authenticates requests by the raw admin key in the `Authorization` header.
///
/// # Header Format
///
/// ```text
/// Authorization: <ADMIN_KEY>
/// ```
///
/// The value is compared as-is; there is no `Bearer` prefix.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `{"error": "Unauthorized"}` if the header is
/// missing, not valid UTF-8, or does not match. The wrapped handler never runs
/// in that case.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/users", get(list_users_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = st.auth_service.authorize(presented) {
        tracing::debug!(
            method = %req.method(),
            path = req.uri().path(),
            "rejected request without valid admin key"
        );
        return Err(e);
    }

    Ok(next.run(req).await)
}
