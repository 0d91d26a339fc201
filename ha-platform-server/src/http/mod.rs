//! HTTP server layer
//!
//! Axum server with:
//! - Three fixed probe routes
//! - Request tracing
//! - Graceful shutdown that drains the database pool

pub mod error;
pub mod routes;
pub mod server;

pub use error::ProbeError;
pub use server::{build_router, run_server, serve, ServerConfig, ServerError};
