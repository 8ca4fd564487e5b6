//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, QuoteService, SearchService, UserService};
use crate::infrastructure::persistence::{KvQuoteRepository, KvUserRepository};
use crate::infrastructure::store::StoreGateway;

/// Services and the store gateway shared across requests.
///
/// Cloned per request by axum; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<KvUserRepository>>,
    pub quote_service: Arc<QuoteService<KvQuoteRepository>>,
    pub search_service: Arc<SearchService<KvQuoteRepository>>,
    pub auth_service: Arc<AuthService>,
    pub store: Arc<dyn StoreGateway>,
}

impl AppState {
    /// Wires repositories and services over one store gateway.
    pub fn new(store: Arc<dyn StoreGateway>, admin_key: &str) -> Self {
        let user_repository = Arc::new(KvUserRepository::new(store.clone()));
        let quote_repository = Arc::new(KvQuoteRepository::new(store.clone()));

        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            quote_service: Arc::new(QuoteService::new(quote_repository.clone())),
            search_service: Arc::new(SearchService::new(quote_repository)),
            auth_service: Arc::new(AuthService::new(admin_key)),
            store,
        }
    }
}
