//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Cards in the loaded catalog.
    pub cards: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cards: state.catalog.iter().count(),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
