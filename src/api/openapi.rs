//! OpenAPI document served at `GET /openapi.json`.
//!
//! Stored records carry arbitrary extra fields, so the schemas below only
//! describe the fields every record is known to have.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::config::ServiceKind;

#[derive(ToSchema)]
pub struct MessageDoc {
    pub message: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: String,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct QuoteDoc {
    pub id: String,
    pub user_id: String,
    pub quote: String,
}

#[derive(ToSchema)]
pub struct AddQuoteDoc {
    pub user_id: String,
    pub quote: String,
}

#[derive(ToSchema)]
pub struct QuoteCreatedDoc {
    pub message: String,
    pub id: u64,
}

/// Declares the raw `Authorization` header as the `admin_key` scheme.
struct AdminKey;

impl Modify for AdminKey {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "citations"),
    paths(
        crate::api::handlers::root::root_handler,
        crate::api::handlers::health::health_handler,
        crate::api::handlers::users::list_users_handler,
        crate::api::handlers::users::add_user_handler,
        crate::api::handlers::quotes::list_quotes_handler,
        crate::api::handlers::quotes::add_quote_handler,
        crate::api::handlers::quotes::delete_quote_handler,
        crate::api::handlers::search::search_handler,
    ),
    components(
        schemas(
            MessageDoc,
            ErrorDoc,
            UserDoc,
            QuoteDoc,
            AddQuoteDoc,
            QuoteCreatedDoc,
            HealthResponse,
            HealthChecks,
            CheckStatus,
        )
    ),
    modifiers(&AdminKey),
    tags(
        (name = "meta"),
        (name = "users"),
        (name = "quotes"),
        (name = "search")
    )
)]
pub struct ApiDoc;

/// Builds the document for one service, keeping only the paths it mounts.
pub fn document(service: ServiceKind) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.paths.paths.retain(|path, _| is_mounted(service, path));
    doc
}

fn is_mounted(service: ServiceKind, path: &str) -> bool {
    match path {
        "/users" => service.serves_users(),
        "/quotes" | "/quotes/{id}" => service.serves_quotes(),
        "/search" => service.serves_search(),
        _ => true,
    }
}
