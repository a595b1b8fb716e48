//! Response types for the attendance engine API.
//!
//! This module defines the success payloads that are not plain models and
//! the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{HolidayEntry, MonthReport};

/// Response body for `/attendance/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReportResponse {
    /// One report per employee, in request order.
    pub reports: Vec<MonthReport>,
}

/// Response body for `/holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaysResponse {
    /// The calendar name.
    pub name: String,
    /// The calendar's UTC offset in minutes.
    pub utc_offset_minutes: i32,
    /// The listed holidays.
    pub holidays: Vec<HolidayEntry>,
}

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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidMonth { year, month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month {}-{}", year, month),
                    "Month must be between 1 and 12",
                ),
            },
            err @ EngineError::InvalidLeave { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEAVE",
                    err.to_string(),
                    "Leave intervals must not end before they start",
                ),
            },
            err @ EngineError::InvalidPunch { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PUNCH",
                    err.to_string(),
                    "Each date may carry at most one punch record",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_malformed_json_omits_details() {
        let json = serde_json::to_value(ApiError::malformed_json("Invalid JSON syntax")).unwrap();
        assert_eq!(json["code"], "MALFORMED_JSON");
        assert_eq!(json["message"], "Invalid JSON syntax");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_duplicate_punch_maps_with_details() {
        let api_error: ApiErrorResponse = EngineError::InvalidPunch {
            date: NaiveDate::from_ymd_opt(2025, 5, 19).unwrap(),
            message: "duplicate punch record".to_string(),
        }
        .into();
        let json = serde_json::to_value(&api_error.error).unwrap();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_PUNCH");
        assert!(json["details"].as_str().unwrap().contains("at most one"));
    }

    #[test]
    fn test_invalid_month_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidMonth {
            year: 2025,
            month: 13,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_MONTH");
        assert_eq!(api_error.error.message, "Invalid month 2025-13");
    }

    #[test]
    fn test_invalid_leave_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidLeave {
            leave_type: "SL".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_LEAVE");
        assert!(api_error.error.message.contains("'SL'"));
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
