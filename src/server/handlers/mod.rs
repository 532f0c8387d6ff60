//! Request handlers.

mod archives;
mod documents;
mod misc;

pub use archives::{create_archive, list_archives};
pub use documents::{create_document, get_document, list_documents};
pub use misc::{dashboard, health};

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::repository::StoreError;

/// Map a store failure onto a JSON error response the client can retry.
fn error_response(err: StoreError) -> axum::response::Response {
    let status = match &err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::Sqlite(_) | StoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("store error: {err}");
    }
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}
