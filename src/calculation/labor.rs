//! Standalone labor cost formula.

use rust_decimal::Decimal;

use crate::models::{DerivedUnit, RateProfile, ServiceCategory, StandaloneLaborItem};

use super::item_cost::{ItemCostResult, ItemPricing};

/// Prices a standalone labor item: `hours × laborer_rate`, with no wear.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::calculate_standalone_labor;
/// use cutting_estimator::models::{RateProfile, StandaloneLaborItem};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let item = StandaloneLaborItem {
///     id: Uuid::new_v4(),
///     description: "Debris removal".to_string(),
///     hours: dec!(4),
///     complexity_pct: dec!(50),
/// };
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
///
/// let result = calculate_standalone_labor(&item, &rates, 1);
/// assert_eq!(result.cost.base_cost, dec!(88));
/// assert_eq!(result.cost.final_cost, dec!(132));
/// ```
pub fn calculate_standalone_labor(
    item: &StandaloneLaborItem,
    rates: &RateProfile,
    step_number: u32,
) -> ItemCostResult {
    ItemPricing {
        item_id: item.id,
        category: ServiceCategory::StandaloneLabor,
        description: &item.description,
        inputs: serde_json::json!({
            "hours": item.hours.normalize().to_string()
        }),
        derived_quantity: item.hours,
        derived_unit: DerivedUnit::Hours,
        labor_hours: item.hours,
        labor_rate: rates.laborer_rate,
        wear_cost: Decimal::ZERO,
        complexity_pct: item.complexity_pct,
    }
    .finish(step_number)
}
