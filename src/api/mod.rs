//! HTTP API module for the estimate engine.
//!
//! This module provides the REST API endpoints for pricing concrete-cutting
//! estimates and listing the configured rate profiles.

mod handlers;
pub mod lenient;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use lenient::coerce_decimal;
pub use request::{
    AdditionalCostsRequest, CoreDrillingRequest, EstimateRequest, LinearCutRequest, RatesRequest,
    StandaloneLaborRequest, WallSawingRequest,
};
pub use response::{ApiError, EstimateResponse, RatesResponse};
pub use state::AppState;
