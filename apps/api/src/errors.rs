use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Stage-level outcomes (`Directory`, `MissingInput`, `EmptyData`) are logical
/// results and render as 200 bodies keyed by `error` or `warning`. Only
/// storage and internal failures surface as transport-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Places directory request failed")]
    Directory { details: Value },

    #[error("File {path} not found. Run {hint} first.")]
    MissingInput { path: String, hint: &'static str },

    #[error("{0}")]
    EmptyData(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Status { meta } => AppError::Directory { details: meta },
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Directory { details } => {
                tracing::warn!("Places directory returned non-success meta: {details}");
                (
                    StatusCode::OK,
                    json!({ "error": self.to_string(), "details": details }),
                )
            }
            AppError::MissingInput { .. } => {
                (StatusCode::OK, json!({ "error": self.to_string() }))
            }
            AppError::EmptyData(msg) => (StatusCode::OK, json!({ "warning": msg })),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "A storage error occurred" }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
