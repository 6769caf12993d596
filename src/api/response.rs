//! Response types for the estimate API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EstimateResult, EstimateTotals, RateProfile};

/// Response body for `POST /estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// The full-precision estimate.
    #[serde(flatten)]
    pub estimate: EstimateResult,
    /// The same totals rounded to cents for display.
    pub display_totals: EstimateTotals,
}

impl From<EstimateResult> for EstimateResponse {
    fn from(estimate: EstimateResult) -> Self {
        let display_totals = estimate.totals.rounded();
        Self {
            estimate,
            display_totals,
        }
    }
}

/// Response body for `GET /rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The profile used when a request names none.
    pub default_profile: String,
    /// The currency the rates are expressed in.
    pub currency: String,
    /// Every configured profile, by name.
    pub profiles: BTreeMap<String, RateProfile>,
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

    /// Creates a rate profile not found error response.
    pub fn profile_not_found(name: &str) -> Self {
        Self::with_details(
            "PROFILE_NOT_FOUND",
            format!("Rate profile not found: {}", name),
            "Use GET /rates to list the configured rate profiles",
        )
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
            EngineError::InvalidRateProfile { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid rate profile",
                    format!("Invalid rate profile field '{}': {}", field, message),
                ),
            },
            EngineError::ProfileNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::profile_not_found(&name),
            },
        }
    }
}
