//! Document listing and creation endpoints.

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::error_response;
use crate::models::NewDocument;
use crate::query::ListQuery;
use crate::repository::RecordStore;
use crate::server::AppState;

/// List/search documents with filters, sorting, and pagination.
///
/// Takes the raw query string rather than a typed extractor: the codec
/// owns alias precedence (`perPage`/`limit`/`pageSize`) and tolerant
/// parsing, and malformed parameters must fall back to defaults instead
/// of rejecting the request.
pub async fn list_documents(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    let query = ListQuery::decode(raw.as_deref().unwrap_or(""));
    match state.store.list(&query).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a single document by ID.
pub async fn get_document(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
) -> impl IntoResponse {
    match state.store.get(&doc_id).await {
        Ok(Some(doc)) => Json(doc).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Document not found" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Create a document inside an archive.
pub async fn create_document(
    State(state): State<AppState>,
    Json(input): Json<NewDocument>,
) -> impl IntoResponse {
    match state.store.create_document(input).await {
        Ok(doc) => (StatusCode::CREATED, Json(doc)).into_response(),
        Err(e) => error_response(e),
    }
}
