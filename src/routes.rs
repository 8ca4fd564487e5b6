//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Greeting (public)
//! - `GET /health`  - Store health check (public)
//! - `GET /openapi.json` - OpenAPI document of the mounted routes (public)
//! - everything else from [`crate::api::routes::protected_routes`] (admin key required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Shared admin key on guarded routes only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{auth, tracing};
use crate::config::ServiceKind;
use crate::state::AppState;
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router for one service, without path normalization.
///
/// The auth guard is applied with `route_layer`, so unknown paths still
/// answer 404 rather than 401.
pub fn router(state: AppState, service: ServiceKind) -> Router {
    let protected = api::routes::protected_routes(service)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let doc = api::openapi::document(service);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/openapi.json", get(move || async move { Json(doc) }))
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `service` - which surface to mount (`users`, `quotes`, `search` or `all`)
pub fn app_router(state: AppState, service: ServiceKind) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, service))
}
