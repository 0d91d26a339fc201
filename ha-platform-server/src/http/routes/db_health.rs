//! Readiness probe - one INSERT ... RETURNING round trip

use axum::{extract::State, routing::get, Router};

use crate::http::error::ProbeError;
use crate::state::AppState;

/// GET /db-health
async fn db_health(State(state): State<AppState>) -> Result<String, ProbeError> {
    let row = state.store().record_probe().await?;
    tracing::debug!(row = row.id, "readiness probe recorded");
    Ok(format!("DB OK, row={}", row.id))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/db-health", get(db_health))
}
