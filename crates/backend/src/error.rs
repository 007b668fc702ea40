//! Unified error handling for the events API.
//!
//! Handlers return `ApiResult<T>` and use `?` freely; `IntoResponse` turns
//! each variant into a status code and a JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// API error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Unified error type for API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input, detected before any store access
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Calendar or event lookup miss, carrying the message shown to clients
    #[error("{0}")]
    NotFound(String),

    /// Authentication required but not provided or invalid
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not permitted
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Store failure surfaced as-is
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Error for a required field that is absent or blank.
    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("{} is required", field))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
            ApiError::Storage(e) => match e {
                StoreError::NotFound(_) => {
                    tracing::debug!("Store miss: {}", e);
                    (
                        StatusCode::NOT_FOUND,
                        "Resource not found".to_string(),
                        Some(e.to_string()),
                    )
                }
                StoreError::ConnectionPool(_) => {
                    tracing::error!("Connection pool error: {:?}", e);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Database connection unavailable".to_string(),
                        Some(e.to_string()),
                    )
                }
                _ => {
                    tracing::error!("Storage error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage operation failed".to_string(),
                        Some(e.to_string()),
                    )
                }
            },
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
