//! Error types for ha-platform-server

use thiserror::Error;

/// Configuration could not be read from the environment
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Database error type
#[derive(Error, Debug)]
pub enum DbError {
    /// No connection became available within the acquisition timeout,
    /// or the server could not be reached at all.
    #[error("database unreachable or pool exhausted: {0}")]
    PoolExhaustedOrUnreachable(#[source] sqlx::Error),

    /// The pool has been drained and accepts no new work.
    #[error("connection pool is closed")]
    PoolClosed,

    /// The statement reached the server and failed there.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("statement returned no row")]
    MissingRow,
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolClosed => Self::PoolClosed,
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::Tls(_)) => {
                Self::PoolExhaustedOrUnreachable(e)
            }
            other => Self::Database(other),
        }
    }
}

/// Startup schema creation failed
#[derive(Error, Debug)]
#[error("schema initialization failed: {0}")]
pub struct SchemaInitError(#[from] pub DbError);
