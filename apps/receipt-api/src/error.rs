//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Receipt API                        │
//! │                                                                         │
//! │  Handler → ReceiptService                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ServiceError::ValidationFailed ──► 400 VALIDATION_ERROR + violations   │
//! │  ServiceError::NotFound         ──► 404 NOT_FOUND                       │
//! │  JsonRejection (bad body)       ──► 400 MALFORMED_RECEIPT               │
//! │  JsonRejection (body too big)   ──► 413 PAYLOAD_TOO_LARGE               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{ValidationError, ViolationKind};
use serde::Serialize;

use crate::services::ServiceError;

/// Message returned for bodies that cannot be read as a receipt.
pub const MALFORMED_MESSAGE: &str = "The receipt is invalid.";

/// Message returned for unknown receipt ids.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// API error returned from HTTP handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "No receipt found for that ID."
/// }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Every failed rule, for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<ViolationBody>>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Receipt failed validation (400)
    ValidationError,

    /// Body is not a receipt (400)
    MalformedReceipt,

    /// Body exceeds the configured limit (413)
    PayloadTooLarge,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::MalformedReceipt => StatusCode::BAD_REQUEST,
            ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// One violation as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationBody {
    pub kind: ViolationKind,
    pub field: String,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            violations: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, NOT_FOUND_MESSAGE)
    }

    /// Creates a malformed body error.
    pub fn malformed() -> Self {
        ApiError::new(ErrorCode::MalformedReceipt, MALFORMED_MESSAGE)
    }

    /// Creates a body size error.
    pub fn payload_too_large(limit: usize) -> Self {
        ApiError::new(
            ErrorCode::PayloadTooLarge,
            format!("Request body exceeds {} bytes", limit),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        let violations = error
            .violations()
            .iter()
            .map(|violation| ViolationBody {
                kind: violation.kind,
                field: violation.field.clone(),
                message: violation.kind.to_string(),
            })
            .collect();

        ApiError {
            code: ErrorCode::ValidationError,
            message: error.to_string(),
            violations: Some(violations),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::ValidationFailed(err) => ApiError::from(err),
            ServiceError::NotFound { .. } => ApiError::not_found(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
