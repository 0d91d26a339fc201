//! Landing page and liveness probe
//!
//! Neither route touches the database.

use axum::{routing::get, Router};

pub const ROOT_BODY: &str = "HA Platform Running";
pub const HEALTH_BODY: &str = "OK";

/// GET /
async fn root() -> &'static str {
    ROOT_BODY
}

/// GET /health
async fn health() -> &'static str {
    HEALTH_BODY
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
