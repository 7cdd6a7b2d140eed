//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`. Every
//! error body has the `{message, details?}` shape documented as
//! `ErrorResponse`. Internal error details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ensapi_core::FieldErrors;
use ensapi_routes::responses::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request input failed its validation rule (400).
    #[error("{0}")]
    InvalidInput(FieldErrors),

    /// No route matches the request (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Server-side fault (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::InvalidInput(errors) => ErrorResponse::invalid_input(errors),
            Self::NotFound(_) => ErrorResponse::new(self.to_string()),
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                ErrorResponse::new("An internal error occurred")
            }
        };
        (status, Json(body)).into_response()
    }
}
