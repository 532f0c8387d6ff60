//! Archive folder endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::error_response;
use crate::models::NewArchive;
use crate::repository::RecordStore;
use crate::server::AppState;

/// List all archive folders.
pub async fn list_archives(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.archives().await {
        Ok(archives) => Json(archives).into_response(),
        Err(e) => error_response(e),
    }
}

/// Create an archive folder.
pub async fn create_archive(
    State(state): State<AppState>,
    Json(input): Json<NewArchive>,
) -> impl IntoResponse {
    match state.store.create_archive(input).await {
        Ok(archive) => (StatusCode::CREATED, Json(archive)).into_response(),
        Err(e) => error_response(e),
    }
}
