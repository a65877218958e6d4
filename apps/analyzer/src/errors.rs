use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("No resume has been analyzed yet")]
    NoResume,

    #[error("Superseded by a newer upload")]
    Superseded,

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NoResume | AppError::Superseded => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user. Server-side failures are logged and
    /// replaced with a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Extraction(e) => format!("{e}. Please upload a different PDF."),
            AppError::NoResume => "Upload a resume before matching a job description".to_string(),
            AppError::Superseded => {
                "A newer upload replaced this one before it finished".to_string()
            }
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                "The page could not be rendered".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Extraction(_) => "EXTRACTION_FAILED",
            AppError::NoResume => "NO_RESUME",
            AppError::Superseded => "SUPERSEDED",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.user_message()
            }
        }));

        (self.status_code(), body).into_response()
    }
}
