//! Dashboard and health endpoints.

use axum::{extract::State, response::IntoResponse, Json};

use super::error_response;
use crate::repository::RecordStore;
use crate::server::AppState;

/// Aggregate data for the dashboard landing page.
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.dashboard().await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => error_response(e),
    }
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
