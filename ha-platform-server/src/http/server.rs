//! Axum server setup
//!
//! Server skeleton with:
//! - Tracing middleware
//! - Schema initialization in the background
//! - Graceful shutdown on SIGTERM/Ctrl+C, followed by a pool drain

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{spawn_schema_init, HealthStore};
use crate::lifecycle::{Lifecycle, Phase};
use crate::shutdown::ShutdownCoordinator;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::db_health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind_addr` and serve until `signal` resolves.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(PgHealthStore::new(DbPool::connect_lazy(&db_config)));
/// run_server(ServerConfig::default(), store, shutdown_signal()).await?;
/// ```
pub async fn run_server<F>(
    config: ServerConfig,
    store: Arc<dyn HealthStore>,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr).await?;
    serve(listener, store, Lifecycle::new(), signal).await
}

/// Serve on an already bound listener.
///
/// Returns after the listener has stopped, in-flight requests have
/// finished and the store has been drained.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn HealthStore>,
    lifecycle: Lifecycle,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    spawn_schema_init(store.clone());

    let coordinator = ShutdownCoordinator::new(store.clone(), lifecycle.clone());
    let app = build_router(AppState::new(store));

    let addr = listener.local_addr()?;
    lifecycle.advance(Phase::Ready);
    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(coordinator.clone().wait(signal))
        .await;

    // Drain even when serving failed, so no connection is left dangling
    coordinator.drain().await;
    served?;

    Ok(())
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
