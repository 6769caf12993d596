//! Sawing cost formulas.
//!
//! Wall sawing is priced on the area of cut face for labor and on linear
//! feet for blade wear. Chain saw, hand saw and slab sawing are priced on
//! linear feet alone and differ only in their coefficients.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DerivedUnit, LinearCutItem, RateProfile, ServiceCategory, WallSawingItem};

use super::item_cost::{ItemCostResult, ItemPricing};

/// Square inches per square foot.
pub const SQUARE_INCHES_PER_SQUARE_FOOT: Decimal = dec!(144);

/// Technician hours per square foot of wall cut.
pub const WALL_SAWING_HOURS_PER_SQUARE_FOOT: Decimal = dec!(0.25);

/// Blade wear cost per linear foot of wall cut.
pub const WALL_SAWING_WEAR_PER_FOOT: Decimal = dec!(3.5);

/// Labor and wear coefficients for a cut priced by linear feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearCutCoefficients {
    /// The category these coefficients price.
    pub category: ServiceCategory,
    /// Technician hours per linear foot.
    pub hours_per_foot: Decimal,
    /// Blade wear cost per linear foot.
    pub wear_per_foot: Decimal,
}

/// Hand-held chain saw: 0.2 h/ft, $4.00/ft wear.
pub const HAND_HELD_CHAIN_SAW: LinearCutCoefficients = LinearCutCoefficients {
    category: ServiceCategory::HandHeldChainSaw,
    hours_per_foot: dec!(0.2),
    wear_per_foot: dec!(4.0),
};

/// Hand saw: 0.18 h/ft, $3.00/ft wear.
pub const HAND_SAW: LinearCutCoefficients = LinearCutCoefficients {
    category: ServiceCategory::HandSaw,
    hours_per_foot: dec!(0.18),
    wear_per_foot: dec!(3.0),
};

/// Slab sawing: 0.12 h/ft, $2.00/ft wear.
pub const SLAB_SAWING: LinearCutCoefficients = LinearCutCoefficients {
    category: ServiceCategory::SlabSawing,
    hours_per_foot: dec!(0.12),
    wear_per_foot: dec!(2.0),
};

/// Prices a wall sawing item.
///
/// `area = quantity × length_feet × depth_inches / 144`, labor is `area × 0.25`
/// hours at the technician rate, and blade wear is `length_feet × quantity × 3.5`.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::calculate_wall_sawing;
/// use cutting_estimator::models::{RateProfile, WallSawingItem};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let item = WallSawingItem {
///     id: Uuid::new_v4(),
///     description: "Door opening".to_string(),
///     quantity: dec!(1),
///     length_feet: dec!(4),
///     depth_inches: dec!(8),
///     complexity_pct: dec!(20),
/// };
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
///
/// let result = calculate_wall_sawing(&item, &rates, 1);
/// assert_eq!(result.cost.wear_cost, dec!(14));
/// assert_eq!(result.cost.final_cost.round_dp(3), dec!(18.733));
/// ```
pub fn calculate_wall_sawing(
    item: &WallSawingItem,
    rates: &RateProfile,
    step_number: u32,
) -> ItemCostResult {
    let area = item
        .quantity
        .saturating_mul(item.length_feet)
        .saturating_mul(item.depth_inches)
        / SQUARE_INCHES_PER_SQUARE_FOOT;
    let linear_feet = item.length_feet.saturating_mul(item.quantity);

    ItemPricing {
        item_id: item.id,
        category: ServiceCategory::WallSawing,
        description: &item.description,
        inputs: serde_json::json!({
            "quantity": item.quantity.normalize().to_string(),
            "length_feet": item.length_feet.normalize().to_string(),
            "depth_inches": item.depth_inches.normalize().to_string()
        }),
        derived_quantity: area,
        derived_unit: DerivedUnit::SquareFeet,
        labor_hours: area.saturating_mul(WALL_SAWING_HOURS_PER_SQUARE_FOOT),
        labor_rate: rates.technician_rate,
        wear_cost: linear_feet.saturating_mul(WALL_SAWING_WEAR_PER_FOOT),
        complexity_pct: item.complexity_pct,
    }
    .finish(step_number)
}

/// Prices a cut by linear feet using the given coefficients.
///
/// `linear_feet = quantity × length_feet`, labor is
/// `linear_feet × hours_per_foot` at the technician rate, and blade wear is
/// `linear_feet × wear_per_foot`.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::{SLAB_SAWING, calculate_linear_cut};
/// use cutting_estimator::models::{LinearCutItem, RateProfile};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let item = LinearCutItem {
///     id: Uuid::new_v4(),
///     description: "Trench".to_string(),
///     quantity: dec!(2),
///     length_feet: dec!(50),
///     complexity_pct: dec!(0),
/// };
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
///
/// // 100 ft: 12h x $29 = $348 labor + $200 wear
/// let result = calculate_linear_cut(&item, &SLAB_SAWING, &rates, 1);
/// assert_eq!(result.cost.final_cost, dec!(548));
/// ```
pub fn calculate_linear_cut(
    item: &LinearCutItem,
    coefficients: &LinearCutCoefficients,
    rates: &RateProfile,
    step_number: u32,
) -> ItemCostResult {
    let linear_feet = item.quantity.saturating_mul(item.length_feet);

    ItemPricing {
        item_id: item.id,
        category: coefficients.category,
        description: &item.description,
        inputs: serde_json::json!({
            "quantity": item.quantity.normalize().to_string(),
            "length_feet": item.length_feet.normalize().to_string()
        }),
        derived_quantity: linear_feet,
        derived_unit: DerivedUnit::LinearFeet,
        labor_hours: linear_feet.saturating_mul(coefficients.hours_per_foot),
        labor_rate: rates.technician_rate,
        wear_cost: linear_feet.saturating_mul(coefficients.wear_per_foot),
        complexity_pct: item.complexity_pct,
    }
    .finish(step_number)
}
