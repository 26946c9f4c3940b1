use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The response body is a flat `{"error": "..."}` object — the contract every
/// client of this API expects on failure paths.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UpstreamApi(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UpstreamApi(msg) => {
                tracing::error!("Upstream API error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Everything that can go wrong between an uploaded résumé and structured
/// résumé data. Callers branch on the kind instead of string-matching
/// messages; the façade maps each kind to its HTTP shape.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Only PDF files are supported")]
    UnsupportedType,

    #[error("Resume content is empty or could not be extracted")]
    EmptyContent,

    #[error("Failed to read PDF: {0}")]
    Extraction(String),

    #[error("Model invocation failed: {0}")]
    Model(#[from] LlmError),

    /// The model's reply was not extractable JSON. The raw reply text is kept
    /// for diagnostics and manual recovery.
    #[error("Failed to parse resume data: {source}")]
    Parse {
        source: serde_json::Error,
        raw: String,
    },

    #[error("Invalid resume data structure")]
    InvalidShape,
}
