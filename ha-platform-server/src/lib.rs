//! ha-platform-server: liveness and readiness probes over HTTP
//!
//! Serves `/`, `/health` and `/db-health`. The readiness probe writes a row
//! to PostgreSQL through a bounded connection pool; everything else is
//! independent of the database.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod shutdown;
pub mod state;

pub use config::DbConfig;
pub use db::{DbPool, HealthStore, HealthcheckRow, PgHealthStore};
pub use error::{ConfigError, DbError, SchemaInitError};
pub use http::{build_router, run_server, serve, ServerConfig, ServerError};
pub use lifecycle::{Lifecycle, Phase};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
pub use state::AppState;
