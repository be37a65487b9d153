//! Error types for the HARU API
//!
//! Defines the API-layer error taxonomy and its translation to HTTP
//! responses. Every failure serializes as `{"error": <message>}` with a
//! status code reflecting the failure class.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use haru_content::ResolveError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request contains invalid input data
    InvalidInput,

    /// Generation provider rate limit exhausted
    QuotaExceeded,

    /// Generation produced no usable record
    GenerationFailed,

    /// Provider or store credentials absent/rejected
    CredentialsUnconfigured,

    /// Persistence layer unreachable
    StoreUnavailable,

    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::GenerationFailed
            | ErrorCode::CredentialsUnconfigured
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error for API operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::QuotaExceeded { message } => Self::new(ErrorCode::QuotaExceeded, message),
            ResolveError::GenerationFailed { message } => {
                Self::new(ErrorCode::GenerationFailed, message)
            }
            ResolveError::StoreUnavailable { message } => Self::new(
                ErrorCode::StoreUnavailable,
                format!("Database connection failed: {}", message),
            ),
            ResolveError::CredentialsUnconfigured { message } => {
                Self::new(ErrorCode::CredentialsUnconfigured, message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            error: self.message,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
