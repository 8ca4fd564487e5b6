//! # Citations
//!
//! Users, quotes and keyword-search HTTP services sharing one Redis store,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services and the first-boot seed
//! - **Infrastructure Layer** ([`infrastructure`]) - Store gateway and repositories over it
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! Request flow: admin key guard → handler → service → repository →
//! [`infrastructure::store::StoreGateway`] → Redis.
//!
//! ## Services
//!
//! One binary serves any of the three surfaces (`--service users|quotes|search|all`):
//!
//! - **users** - `GET/POST /users`, seeds users from CSV on first boot
//! - **quotes** - `GET/POST /quotes`, `DELETE /quotes/{id}`, `GET /search`
//! - **search** - `GET /search`
//!
//! `GET /`, `GET /health` and `GET /openapi.json` are mounted everywhere and need no key.
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_KEY="change-me"
//! export REDIS_HOST="localhost"
//!
//! cargo run -- --service all
//! curl -H "Authorization: change-me" localhost:5000/users
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, QuoteService, SearchService, UserService};
    pub use crate::config::ServiceKind;
    pub use crate::domain::entities::{NewQuote, Record, User};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore, StoreGateway};
    pub use crate::state::AppState;
}
