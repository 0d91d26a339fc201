//! Graceful shutdown
//!
//! On SIGTERM or Ctrl+C:
//! - the listener stops accepting and in-flight requests finish
//! - the database pool is drained
//! - only then does the server future return

use std::future::Future;
use std::sync::Arc;

use crate::db::HealthStore;
use crate::lifecycle::{Lifecycle, Phase};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Owns the pieces that must be torn down in order
#[derive(Clone)]
pub struct ShutdownCoordinator {
    store: Arc<dyn HealthStore>,
    lifecycle: Lifecycle,
}

impl ShutdownCoordinator {
    pub fn new(store: Arc<dyn HealthStore>, lifecycle: Lifecycle) -> Self {
        Self { store, lifecycle }
    }

    /// Resolve once `signal` fires, after moving to `Draining`.
    ///
    /// Hand this to axum's graceful shutdown.
    pub async fn wait<F>(self, signal: F)
    where
        F: Future<Output = ()> + Send,
    {
        signal.await;
        tracing::info!("termination requested, no longer accepting connections");
        self.lifecycle.advance(Phase::Draining);
    }

    /// Close the pool and mark the process terminated.
    ///
    /// Passes through `Draining` even when no signal was seen, e.g. when
    /// serving stopped on an I/O error.
    pub async fn drain(&self) {
        if self.lifecycle.phase() < Phase::Draining {
            self.lifecycle.advance(Phase::Draining);
        }
        self.store.drain().await;
        self.lifecycle.advance(Phase::Terminated);
        tracing::info!("shutdown complete");
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}
