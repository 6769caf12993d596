//! Core drilling cost formula.
//!
//! Drilling is priced on footage: the total linear feet of material drilled
//! across all holes. Hole layout (width and spacing) does not affect cost.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{CoreDrillingItem, DerivedUnit, RateProfile, ServiceCategory};

use super::item_cost::{ItemCostResult, ItemPricing};

/// Inches per foot.
pub const INCHES_PER_FOOT: Decimal = dec!(12);

/// Technician hours per foot drilled.
pub const CORE_DRILLING_HOURS_PER_FOOT: Decimal = dec!(0.15);

/// Diamond bit wear cost per foot drilled.
pub const CORE_DRILLING_WEAR_PER_FOOT: Decimal = dec!(2.5);

/// Prices a core drilling item.
///
/// `footage = quantity × depth_inches / 12`, labor is `footage × 0.15` hours at
/// the technician rate, and bit wear is `footage × 2.5`.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::calculate_core_drilling;
/// use cutting_estimator::models::{CoreDrillingItem, RateProfile};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let item = CoreDrillingItem {
///     id: Uuid::new_v4(),
///     description: String::new(),
///     quantity: dec!(6),
///     depth_inches: dec!(20),
///     complexity_pct: dec!(0),
///     width: dec!(0),
///     length_interval: dec!(0),
///     width_interval: dec!(0),
/// };
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
///
/// let result = calculate_core_drilling(&item, &rates, 1);
/// assert_eq!(result.cost.derived_quantity, dec!(10));
/// assert_eq!(result.cost.labor_hours, dec!(1.5));
/// assert_eq!(result.cost.final_cost, dec!(68.5));
/// ```
pub fn calculate_core_drilling(
    item: &CoreDrillingItem,
    rates: &RateProfile,
    step_number: u32,
) -> ItemCostResult {
    // Multiplying before dividing keeps whole-foot footage exact.
    let footage = item.quantity.saturating_mul(item.depth_inches) / INCHES_PER_FOOT;

    ItemPricing {
        item_id: item.id,
        category: ServiceCategory::CoreDrilling,
        description: &item.description,
        inputs: serde_json::json!({
            "quantity": item.quantity.normalize().to_string(),
            "depth_inches": item.depth_inches.normalize().to_string()
        }),
        derived_quantity: footage,
        derived_unit: DerivedUnit::Footage,
        labor_hours: footage.saturating_mul(CORE_DRILLING_HOURS_PER_FOOT),
        labor_rate: rates.technician_rate,
        wear_cost: footage.saturating_mul(CORE_DRILLING_WEAR_PER_FOOT),
        complexity_pct: item.complexity_pct,
    }
    .finish(step_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn rates() -> RateProfile {
        RateProfile::new(dec!(29), dec!(22), dec!(0.80))
    }

    fn drilling(quantity: Decimal, depth_inches: Decimal, complexity_pct: Decimal) -> CoreDrillingItem {
        CoreDrillingItem {
            id: Uuid::new_v4(),
            description: "Slab penetrations".to_string(),
            quantity,
            depth_inches,
            complexity_pct,
            width: dec!(4),
            length_interval: dec!(0),
            width_interval: dec!(0),
        }
    }

    #[test]
    fn test_six_holes_twenty_inches_deep() {
        let result = calculate_core_drilling(&drilling(dec!(6), dec!(20), dec!(0)), &rates(), 1);

        assert_eq!(result.cost.derived_quantity, dec!(10));
        assert_eq!(result.cost.labor_hours, dec!(1.5));
        assert_eq!(result.cost.labor_cost, dec!(43.5));
        assert_eq!(result.cost.wear_cost, dec!(25));
        assert_eq!(result.cost.base_cost, dec!(68.5));
        assert_eq!(result.cost.final_cost, dec!(68.5));
        assert_eq!(result.cost.derived_unit, DerivedUnit::Footage);
    }

    #[test]
    fn test_complexity_surcharge_applies_to_drilling() {
        let result = calculate_core_drilling(&drilling(dec!(6), dec!(20), dec!(20)), &rates(), 1);

        assert_eq!(result.cost.base_cost, dec!(68.5));
        assert_eq!(result.cost.final_cost, dec!(82.2));
    }

    #[test]
    fn test_layout_fields_do_not_change_cost() {
        let mut wide = drilling(dec!(6), dec!(20), dec!(0));
        wide.width = dec!(12);
        wide.length_interval = dec!(18);
        wide.width_interval = dec!(36);

        let narrow = drilling(dec!(6), dec!(20), dec!(0));

        assert_eq!(
            calculate_core_drilling(&wide, &rates(), 1).cost.final_cost,
            calculate_core_drilling(&narrow, &rates(), 1).cost.final_cost
        );
    }

    #[test]
    fn test_uses_technician_rate() {
        let result = calculate_core_drilling(&drilling(dec!(12), dec!(12), dec!(0)), &rates(), 1);

        // 12 ft footage: 1.8h x $29 = $52.2 labor, $30 wear
        assert_eq!(result.cost.labor_cost, dec!(52.2));
        assert_eq!(result.cost.final_cost, dec!(82.2));
        assert_eq!(result.audit_step.input["labor_rate"], "29");
    }

    #[test]
    fn test_audit_step_records_drilling_inputs() {
        let result = calculate_core_drilling(&drilling(dec!(6), dec!(20), dec!(0)), &rates(), 3);

        assert_eq!(result.audit_step.rule_id, "core_drilling_cost");
        assert_eq!(result.audit_step.rule_name, "Core Drilling Cost");
        assert_eq!(result.audit_step.input["item"]["quantity"], "6");
        assert_eq!(result.audit_step.input["item"]["depth_inches"], "20");
        assert_eq!(result.audit_step.output["derived_quantity"], "10");
    }
}
