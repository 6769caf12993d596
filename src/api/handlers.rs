//! HTTP request handlers for the estimate API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::build_estimate;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::RateProfile;

use super::request::EstimateRequest;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse, RatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /estimate endpoint.
///
/// Accepts an estimate request and returns the priced estimate.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let rates = match resolve_rates(&request, state.config()) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rate profile resolution failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let input = request.into_input(rates);
    let result = build_estimate(&input);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        estimate_id = %result.estimate_id,
        items_count = result.items.len(),
        warnings_count = result.audit_trace.warnings.len(),
        grand_total = %result.totals.grand_total,
        duration_us = duration.as_micros(),
        "Estimate completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(EstimateResponse::from(result)),
    )
        .into_response()
}

/// Handler for GET /rates endpoint.
///
/// Lists the configured rate profiles and the default.
async fn rates_handler(State(state): State<AppState>) -> Json<RatesResponse> {
    let config = state.config();
    Json(RatesResponse {
        default_profile: config.metadata().default_profile.clone(),
        currency: config.metadata().currency.clone(),
        profiles: config.config().profiles().clone(),
    })
}

/// Picks the rates to price with: inline rates, then a named profile, then the default.
fn resolve_rates(request: &EstimateRequest, config: &ConfigLoader) -> EngineResult<RateProfile> {
    if let Some(rates) = &request.rates {
        return Ok(rates.clone().into());
    }
    match &request.rate_profile {
        Some(name) => config.rate_profile(name),
        None => Ok(config.default_rate_profile()),
    }
}
