//! Application error handling

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::ai::GenerationError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    TooManyRequests(String),
    Internal(String),
}

/// JSON error body returned to clients
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::TooManyRequests(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        tracing::error!(error = %err, "Generation failed");
        AppError::Internal(format!("An internal error occurred: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
