//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, first-boot seeding, and the Axum server lifecycle.

use crate::application::bootstrap::{SeedOutcome, seed_users_if_empty};
use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::KvUserRepository;
use crate::infrastructure::store::{MemoryStore, RedisStore, StoreGateway};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store gateway (Redis with retries, or in-memory)
/// - Users seed from CSV, when the users surface is mounted
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store stays unreachable after all connection attempts
/// - The seed file exists but cannot be read or stored
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    if config.service.serves_users() {
        tracing::warn!("User passwords are stored and served in cleartext");
        seed_users(store.clone(), &config).await?;
    }

    let state = AppState::new(store, &config.admin_key);
    let app = app_router(state, config.service);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} service listening on http://{addr}", config.service);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the configured store gateway.
///
/// Redis connections are retried with jittered exponential backoff, up to
/// `STORE_CONNECT_RETRIES` attempts in total.
///
/// # Errors
///
/// Returns an error once every attempt has failed.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn StoreGateway>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Store: in-memory (nothing is persisted)");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => {
            let strategy = ExponentialBackoff::from_millis(2)
                .factor(50)
                .max_delay(Duration::from_secs(5))
                .map(jitter)
                .take(config.store_connect_retries.saturating_sub(1));

            let url = config.redis_url.as_str();
            let store = Retry::spawn(strategy, move || async move {
                RedisStore::connect(url).await.inspect_err(|e| {
                    tracing::warn!(error = %e, "Store connection attempt failed");
                })
            })
            .await
            .context("Failed to connect to Redis")?;

            Ok(Arc::new(store))
        }
    }
}

async fn seed_users(store: Arc<dyn StoreGateway>, config: &Config) -> Result<()> {
    let repository = KvUserRepository::new(store);

    match seed_users_if_empty(&repository, &config.seed_file).await? {
        SeedOutcome::Seeded { users, skipped } if skipped > 0 => {
            tracing::warn!(users, skipped, "Seed file had rows without id");
        }
        outcome => tracing::debug!(?outcome, "Seed step finished"),
    }

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
