//! Probe store - the only database work the HTTP layer does
//!
//! The router and shutdown coordinator talk to `HealthStore`, so tests can
//! swap PostgreSQL for an in-memory fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::db::pool::DbPool;
use crate::db::schema;
use crate::error::{DbError, SchemaInitError};

pub const INSERT_HEALTHCHECK: &str =
    "INSERT INTO healthcheck DEFAULT VALUES RETURNING id, created_at";

/// Row written by each successful readiness probe
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct HealthcheckRow {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait HealthStore: Send + Sync + 'static {
    /// Make sure the `healthcheck` table exists
    async fn ensure_schema(&self) -> Result<(), SchemaInitError>;

    /// Insert one row and return it
    async fn record_probe(&self) -> Result<HealthcheckRow, DbError>;

    /// Stop accepting work and close all connections
    async fn drain(&self);
}

/// `HealthStore` backed by a PostgreSQL pool
#[derive(Clone, Debug)]
pub struct PgHealthStore {
    pool: DbPool,
}

impl PgHealthStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl HealthStore for PgHealthStore {
    async fn ensure_schema(&self) -> Result<(), SchemaInitError> {
        schema::ensure_schema(&self.pool).await
    }

    async fn record_probe(&self) -> Result<HealthcheckRow, DbError> {
        let rows = self.pool.acquire_and_run(INSERT_HEALTHCHECK).await?;
        let row = rows.first().ok_or(DbError::MissingRow)?;
        Ok(HealthcheckRow::from_row(row)?)
    }

    async fn drain(&self) {
        self.pool.drain().await;
    }
}
