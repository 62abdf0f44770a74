use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Unsupported file format. Please upload a PDF or DOCX.";
pub const UNREADABLE_CONTENT_MESSAGE: &str = "Could not read any text from the uploaded file. \
    It may be a scanned or image-only document.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{}", UNSUPPORTED_FORMAT_MESSAGE)]
    UnsupportedFormat,

    #[error("{}", UNREADABLE_CONTENT_MESSAGE)]
    UnreadableContent,

    #[error("{0}")]
    Upstream(#[from] LlmError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat { .. } => AppError::UnsupportedFormat,
            ExtractionError::NoTextRecovered { .. } => AppError::UnreadableContent,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::UnsupportedFormat | AppError::UnreadableContent => {
                StatusCode::BAD_REQUEST
            }
            AppError::Upstream(e) => {
                tracing::error!("Upstream completion error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
