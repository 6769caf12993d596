//! Calculation logic for the estimate engine.
//!
//! This module contains the cost formula for each service category, the
//! complexity surcharge, category aggregation, additional costs (shop fee,
//! mileage, travel, equipment, outside labor and manual entries), the grand
//! total, and the pipeline that runs them in order.

mod additional_costs;
mod category_totals;
mod complexity;
mod drilling;
mod estimate;
mod grand_total;
mod item_cost;
mod labor;
mod sawing;

pub use additional_costs::{
    AdditionalCostsResult, EQUIPMENT_RATE_PER_MAN_NIGHT, ROUND_TRIP_FACTOR, SHOP_FEE_RATE,
    calculate_additional_costs, calculate_equipment_cost, calculate_mileage_cost,
    calculate_outside_labor_cost, calculate_shop_fee, calculate_travel_cost,
};
pub use category_totals::{
    CategoryTotalsResult, calculate_category_totals, category_total, services_subtotal,
};
pub use complexity::{apply_complexity, complexity_multiplier};
pub use drilling::{
    CORE_DRILLING_HOURS_PER_FOOT, CORE_DRILLING_WEAR_PER_FOOT, INCHES_PER_FOOT,
    calculate_core_drilling,
};
pub use estimate::{
    AMOUNT_SATURATED, COMPLEXITY_OUT_OF_RANGE, NEGATIVE_ITEM_INPUT, OVERTIME_PREMIUM_EXCLUDED,
    build_estimate, calculate_estimate,
};
pub use grand_total::{GrandTotalResult, calculate_grand_total};
pub use item_cost::{ItemCostResult, calculate_item_cost, item_cost};
pub use labor::calculate_standalone_labor;
pub use sawing::{
    HAND_HELD_CHAIN_SAW, HAND_SAW, LinearCutCoefficients, SLAB_SAWING,
    SQUARE_INCHES_PER_SQUARE_FOOT, WALL_SAWING_HOURS_PER_SQUARE_FOOT, WALL_SAWING_WEAR_PER_FOOT,
    calculate_linear_cut, calculate_wall_sawing,
};
