//! Startup schema for the readiness probe table

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::db::pool::DbPool;
use crate::db::store::HealthStore;
use crate::error::SchemaInitError;

pub const CREATE_HEALTHCHECK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS healthcheck (
        id SERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Create the `healthcheck` table if it does not exist yet.
///
/// Safe to call any number of times.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaInitError> {
    pool.acquire_and_run(CREATE_HEALTHCHECK_TABLE).await?;
    Ok(())
}

/// Run schema initialization once in the background.
///
/// Failure is logged and otherwise ignored: the server keeps running and
/// `/db-health` reports the database as down until the table exists.
pub fn spawn_schema_init(store: Arc<dyn HealthStore>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match store.ensure_schema().await {
            Ok(()) => tracing::info!("healthcheck table ready"),
            Err(e) => tracing::error!(error = %e, "failed to initialize schema"),
        }
    })
}
