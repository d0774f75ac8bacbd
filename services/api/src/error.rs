//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database not configured or unreachable
    #[error("Service unavailable")]
    ServiceUnavailable,

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database not available".to_string(),
            ),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Classify a repository failure into an API error
///
/// Unique-constraint violations surface as a 400 conflict (a concurrent
/// create won the race for the same email), pool exhaustion and broken
/// connections as 503, and everything else as 500.
pub fn map_repository_error(err: anyhow::Error) -> ApiError {
    if let Some(sqlx_err) = err.downcast_ref::<sqlx::Error>() {
        match sqlx_err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                return ApiError::BadRequest("Email already registered".to_string());
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                return ApiError::ServiceUnavailable;
            }
            _ => {}
        }
    }

    ApiError::InternalServerError
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
