//! API error taxonomy and its HTTP mapping.
//!
//! The store layer never raises for "not found"; handlers convert absent
//! results to [`ApiError::NotFound`] here. Validation runs at the boundary
//! before the store is called. Anything unexpected becomes a 500 with a
//! generic message — the error's display string is included, internals are
//! not.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use atrium_store::StoreError;
use atrium_types::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("invalid payload")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Conflict(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid form data", "errors": err.errors })),
            )
                .into_response(),
            ApiError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            // A store conflict is a caller error, not a server fault.
            ApiError::Store(err @ StoreError::Conflict { .. }) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": err.to_string() })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": "Internal server error",
                        "error": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
