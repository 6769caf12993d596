//! Core data models for the estimate engine.
//!
//! This module contains all the domain models used throughout the engine.

mod additional_costs;
mod estimate_input;
mod estimate_result;
mod line_item;
mod money;
mod rate_profile;

pub use additional_costs::AdditionalCosts;
pub use estimate_input::EstimateInput;
pub use estimate_result::{
    AuditStep, AuditTrace, AuditWarning, CategoryTotals, DerivedUnit, EstimateResult,
    EstimateTotals, ItemCost,
};
pub use line_item::{
    CoreDrillingItem, LineItem, LinearCutItem, ServiceCategory, StandaloneLaborItem,
    WallSawingItem,
};
pub use money::{MONEY_DECIMAL_PLACES, round_money};
pub use rate_profile::RateProfile;
