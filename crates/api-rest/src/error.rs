//! HTTP error handling and conversion.
//!
//! Maps domain and infrastructure failures onto the wire contract: every
//! failure body is `{"error": string}`. Validation failures carry the full
//! field-issue message; storage failures are reported generically, with the
//! detail kept in the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use paramed_domain::ValidationError;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Intake payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request (undecodable JSON or form body)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Storage-layer fault; detail is logged, never sent to the caller
    #[error("internal storage error")]
    Storage(#[from] paramed_infrastructure::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape for every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage(source) = &self {
            error!(error = %source, "Storage operation failed");
        }

        let status = self.status_code();
        let body = ErrorResponse::new(self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
