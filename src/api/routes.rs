//! API route configuration.
//!
//! Every route here requires the shared admin key via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    add_quote_handler, add_user_handler, delete_quote_handler, list_quotes_handler,
    list_users_handler, search_handler,
};
use crate::config::ServiceKind;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Guarded routes for the selected service.
///
/// # Endpoints
///
/// | Service  | Routes |
/// |----------|--------|
/// | `users`  | `GET /users`, `POST /users` |
/// | `quotes` | `GET /quotes`, `POST /quotes`, `DELETE /quotes/{id}`, `GET /search` |
/// | `search` | `GET /search` |
/// | `all`    | all of the above |
pub fn protected_routes(service: ServiceKind) -> Router<AppState> {
    let mut router = Router::new();

    if service.serves_users() {
        router = router.route("/users", get(list_users_handler).post(add_user_handler));
    }

    if service.serves_quotes() {
        router = router
            .route("/quotes", get(list_quotes_handler).post(add_quote_handler))
            .route("/quotes/{id}", delete(delete_quote_handler));
    }

    if service.serves_search() {
        router = router.route("/search", get(search_handler));
    }

    router
}
