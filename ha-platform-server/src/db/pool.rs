//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and timeouts.

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::PgPool;

use crate::config::DbConfig;
use crate::error::DbError;

/// Bounded pool of PostgreSQL connections.
///
/// Cloning is cheap and shares the same underlying pool.
#[derive(Clone, Debug)]
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Build the pool without opening any connection.
    ///
    /// Connections are established on first use, so this succeeds even
    /// when the database is down.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = DbPool::connect_lazy(&DbConfig::from_env()?);
    /// ```
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.connect_options());

        tracing::debug!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "database pool configured"
        );

        Self { pool }
    }

    /// Execute one statement on a pooled connection and return its rows.
    ///
    /// Waits at most the acquisition timeout for a free connection.
    pub async fn acquire_and_run(&self, sql: &str) -> Result<Vec<PgRow>, DbError> {
        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Close the pool.
    ///
    /// New acquisitions fail immediately, checked-out connections are
    /// waited for, then every connection is closed.
    pub async fn drain(&self) {
        tracing::info!(
            open_connections = self.pool.size(),
            "draining database pool"
        );
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Connections currently open, idle or in use
    pub fn size(&self) -> u32 {
        self.pool.size()
    }
}
