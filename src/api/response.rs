//! Response types for the Attendance Ledger & Payroll Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses. Conflict outcomes map to 409 because they
//! are the expected result of racing or repeated calls, not system faults.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::BatchResult;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing/invalid identity error response.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new("UNAUTHENTICATED", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::RecordExists { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("RECORD_EXISTS", message),
            },
            EngineError::AlreadyClockedOut { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("ALREADY_CLOCKED_OUT", message),
            },
            EngineError::LeaveNotApproved { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("LEAVE_NOT_APPROVED", message),
            },
            EngineError::NoRecordForDay { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NO_RECORD_FOR_DAY",
                    message,
                    "Clock in before clocking out",
                ),
            },
            EngineError::ClockOutBeforeClockIn { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("VALIDATION_ERROR", message),
            },
            EngineError::NoEmployeeProfile => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("NO_EMPLOYEE_PROFILE", message),
            },
            EngineError::Forbidden { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("FORBIDDEN", message),
            },
            EngineError::NonPositivePeriod { .. }
            | EngineError::PayableDaysOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

/// Response body for the `/attendance/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Operator-facing summary line.
    pub message: String,
    /// The full per-record tally.
    #[serde(flatten)]
    pub result: BatchResult,
}

impl From<BatchResult> for ImportResponse {
    fn from(result: BatchResult) -> Self {
        Self {
            message: result.summary(),
            result,
        }
    }
}
