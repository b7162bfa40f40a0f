//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Body of a successful health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

const OK: HealthResponse = HealthResponse { status: "ok" };

/// Liveness health check endpoint.
///
/// Returns `{"status": "ok"}` if the server is running. Does not check
/// dependencies.
pub async fn health() -> Json<HealthResponse> {
    Json(OK)
}

/// Readiness health check endpoint.
///
/// Pings the recipe store before returning OK.
///
/// # Errors
///
/// Returns a 503 `http_error` if the store is not reachable.
pub async fn readiness(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.recipes().ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::http(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
    })?;

    Ok(Json(OK))
}
