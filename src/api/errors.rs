//! API error types.
//!
//! Every failure maps to a stable string code carried in the error
//! envelope, plus an HTTP status for the wire transport. Store errors are
//! passed through as-is; only absence is not an error (a missing flight is
//! reported as null data, not as a failure).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::ErrorResponse;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request envelope is malformed or missing arguments
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Operation name is not one of the supported five
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Persistence failure from the store
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        ApiError::InvalidRequest(reason.into())
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        ApiError::UnknownOperation(op.into())
    }

    /// Returns the string code carried in the error envelope
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "FLIGHT_INVALID_REQUEST",
            ApiError::UnknownOperation(_) => "FLIGHT_UNKNOWN_OPERATION",
            ApiError::Store(_) => "FLIGHT_STORE_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from_error(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error() {
        let err = ApiError::invalid_request("Missing id");
        assert_eq!(err.code(), "FLIGHT_INVALID_REQUEST");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Missing id"));
    }

    #[test]
    fn test_unknown_operation_error() {
        let err = ApiError::unknown_operation("dropTable");
        assert_eq!(err.code(), "FLIGHT_UNKNOWN_OPERATION");
        assert!(err.to_string().contains("dropTable"));
    }

    #[test]
    fn test_store_error_is_server_side() {
        let err = ApiError::from(StoreError::Schema {
            message: "boom".to_string(),
        });
        assert_eq!(err.code(), "FLIGHT_STORE_ERROR");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
