//! Error handling for the API server
//!
//! Provides a unified error type that maps to HTTP responses. All handlers
//! return `Result<T, ApiError>` which converts to the appropriate status
//! code with a `{"error": "<message>"}` body.
//!
//! Internal failures are logged with full detail at the point they are
//! wrapped; only the terse public message leaves the process.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400) - malformed identifier or body shape
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Bad request (400) - payload failed schema validation
    #[error("validation: {0}")]
    Validation(String),

    /// Not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500) - the public message only; the underlying
    /// failure was already logged
    #[error("internal: {0}")]
    Internal(String),
}

/// Error response format: every error body is `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    /// Wraps a database or other internal failure
    ///
    /// The full error is recorded for diagnostics; callers only ever see
    /// `public`, so raw store errors never leak schema detail.
    pub fn internal(err: impl std::fmt::Display, public: &str) -> Self {
        tracing::error!(error = %err, "{public}");
        ApiError::Internal(public.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) | ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Body-shape failures (invalid JSON, wrong types, missing fields) are
/// client errors: surface the parser's message as a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("id must be a number".to_string());
        assert_eq!(err.to_string(), "bad request: id must be a number");

        let err = ApiError::NotFound("Author not found".to_string());
        assert_eq!(err.to_string(), "not found: Author not found");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::BadRequest("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
