//! ha-platform: probe service entry point
//!
//! Owns the database pool for the whole process and hands it to the
//! server. Exits 0 once a termination signal has been handled and the
//! pool is fully closed.

mod tracing_setup;

use std::sync::Arc;

use anyhow::{Context, Result};
use ha_platform_server::{
    run_server, shutdown_signal, DbConfig, DbPool, PgHealthStore, ServerConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Existing variables win over .env entries
    let env_file = dotenvy::dotenv().ok();
    tracing_setup::init_tracing().ok();
    if let Some(path) = env_file {
        tracing::debug!("Loaded .env from {}", path.display());
    }

    let db_config = DbConfig::from_env().context("Invalid database configuration")?;
    tracing::info!(config = ?db_config, "Starting HA platform probe service");

    let pool = DbPool::connect_lazy(&db_config);
    let store = Arc::new(PgHealthStore::new(pool));

    // Run server (blocks until shutdown and pool drain)
    run_server(ServerConfig::default(), store, shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
