//! Domain layer containing entities and repository contracts.
//!
//! - [`entities`] - Users, quotes and the flat [`entities::Record`] they are stored as
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP layer or on a concrete
//! store; services in [`crate::application::services`] orchestrate it.

pub mod entities;
pub mod repositories;
