use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only batch-level failures live here. A failed evaluation of a single
/// candidate is never an `AppError` — it degrades to that candidate's failure
/// record and the batch continues.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("File format error: {0}")]
    FileFormat(String),

    #[error("No candidate data found in the uploaded file")]
    EmptyBatch,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFile(msg) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FILE", msg.clone())
            }
            AppError::FileFormat(msg) => {
                (StatusCode::BAD_REQUEST, "FILE_FORMAT_ERROR", msg.clone())
            }
            AppError::EmptyBatch => (
                StatusCode::BAD_REQUEST,
                "EMPTY_BATCH",
                "No candidate data found in the uploaded file".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
