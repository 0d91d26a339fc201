//! Database layer - connection pool, schema and the probe store
//!
//! # Design Principles
//!
//! - One pool per process, owned by the entry point and passed down
//! - Every statement goes through `DbPool::acquire_and_run`
//! - No retries: the first failure is the answer

pub mod pool;
pub mod schema;
pub mod store;

pub use pool::DbPool;
pub use schema::{ensure_schema, spawn_schema_init};
pub use store::{HealthStore, HealthcheckRow, PgHealthStore};
