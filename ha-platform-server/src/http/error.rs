//! Readiness failures and their HTTP mapping
//!
//! Every database failure becomes the same 503 body; the cause is logged,
//! never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::DbError;

pub const DB_DOWN_BODY: &str = "DB DOWN";

/// Readiness probe could not complete its database round trip
#[derive(Debug, thiserror::Error)]
#[error("readiness probe failed: {0}")]
pub struct ProbeError(#[from] pub DbError);

impl IntoResponse for ProbeError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "DB health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, DB_DOWN_BODY).into_response()
    }
}
