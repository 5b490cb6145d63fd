//! Application error type mapping to HTTP responses.
//!
//! Provider failures surface as an opaque 500. The cause is logged, not
//! returned, and the status does not vary with the cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use parley_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The generation provider failed.
    Provider(LlmError),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Provider(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Provider(e) => {
                tracing::error!(error = %e, "Provider call failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(axum::http::header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "Internal Server Error",
        )
            .into_response()
    }
}
