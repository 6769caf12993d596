//! Line item cost dispatch.
//!
//! [`calculate_item_cost`] is the single entry point for pricing a line item.
//! It matches on the item's variant and hands off to the category formula.
//! Every formula finishes through [`ItemPricing::finish`], which applies the
//! labor rate, adds wear, and applies the complexity multiplier.
//!
//! Pricing arithmetic saturates at `Decimal::MAX`/`Decimal::MIN` instead of
//! panicking, so an oversized input prices to a pinned amount.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{AuditStep, DerivedUnit, ItemCost, LineItem, RateProfile, ServiceCategory};

use super::complexity::complexity_multiplier;
use super::drilling::calculate_core_drilling;
use super::labor::calculate_standalone_labor;
use super::sawing::{
    HAND_HELD_CHAIN_SAW, HAND_SAW, SLAB_SAWING, calculate_linear_cut, calculate_wall_sawing,
};

/// The result of pricing one line item, including the breakdown and audit step.
#[derive(Debug, Clone)]
pub struct ItemCostResult {
    /// The full cost breakdown.
    pub cost: ItemCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Intermediate quantities a category formula hands back for final pricing.
pub(crate) struct ItemPricing<'a> {
    pub item_id: Uuid,
    pub category: ServiceCategory,
    pub description: &'a str,
    pub inputs: serde_json::Value,
    pub derived_quantity: Decimal,
    pub derived_unit: DerivedUnit,
    pub labor_hours: Decimal,
    pub labor_rate: Decimal,
    pub wear_cost: Decimal,
    pub complexity_pct: Decimal,
}

impl ItemPricing<'_> {
    /// Prices labor, adds wear, and applies complexity.
    pub(crate) fn finish(self, step_number: u32) -> ItemCostResult {
        let labor_cost = self.labor_hours.saturating_mul(self.labor_rate);
        let base_cost = labor_cost.saturating_add(self.wear_cost);
        let multiplier = complexity_multiplier(self.complexity_pct);
        let final_cost = base_cost.saturating_mul(multiplier);

        let audit_step = AuditStep {
            step_number,
            rule_id: format!("{}_cost", self.category.as_str()),
            rule_name: format!("{} Cost", self.category.label()),
            input: serde_json::json!({
                "item_id": self.item_id.to_string(),
                "item": self.inputs,
                "complexity_pct": self.complexity_pct.normalize().to_string(),
                "labor_rate": self.labor_rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "derived_quantity": self.derived_quantity.normalize().to_string(),
                "labor_hours": self.labor_hours.normalize().to_string(),
                "labor_cost": labor_cost.normalize().to_string(),
                "wear_cost": self.wear_cost.normalize().to_string(),
                "base_cost": base_cost.normalize().to_string(),
                "complexity_multiplier": multiplier.normalize().to_string(),
                "final_cost": final_cost.normalize().to_string()
            }),
            reasoning: format!(
                "{}h x ${} = ${} labor + ${} wear = ${} base; ${} x {} = ${}",
                self.labor_hours.normalize(),
                self.labor_rate.normalize(),
                labor_cost.normalize(),
                self.wear_cost.normalize(),
                base_cost.normalize(),
                base_cost.normalize(),
                multiplier.normalize(),
                final_cost.normalize()
            ),
        };

        ItemCostResult {
            cost: ItemCost {
                item_id: self.item_id,
                category: self.category,
                description: self.description.to_string(),
                derived_quantity: self.derived_quantity,
                derived_unit: self.derived_unit,
                labor_hours: self.labor_hours,
                labor_cost,
                wear_cost: self.wear_cost,
                base_cost,
                complexity_multiplier: multiplier,
                final_cost,
            },
            audit_step,
        }
    }
}

/// Prices a single line item.
///
/// Never fails: zero, negative and out-of-range inputs flow through the
/// arithmetic unchanged.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::calculate_item_cost;
/// use cutting_estimator::models::{CoreDrillingItem, LineItem, RateProfile};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let item = LineItem::CoreDrilling(CoreDrillingItem {
///     id: Uuid::new_v4(),
///     description: "Floor penetrations".to_string(),
///     quantity: dec!(6),
///     depth_inches: dec!(20),
///     complexity_pct: dec!(0),
///     width: dec!(0),
///     length_interval: dec!(0),
///     width_interval: dec!(0),
/// });
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
///
/// let result = calculate_item_cost(&item, &rates, 1);
/// assert_eq!(result.cost.final_cost, dec!(68.5));
/// ```
pub fn calculate_item_cost(
    item: &LineItem,
    rates: &RateProfile,
    step_number: u32,
) -> ItemCostResult {
    match item {
        LineItem::CoreDrilling(drilling) => calculate_core_drilling(drilling, rates, step_number),
        LineItem::WallSawing(sawing) => calculate_wall_sawing(sawing, rates, step_number),
        LineItem::HandHeldChainSaw(cut) => {
            calculate_linear_cut(cut, &HAND_HELD_CHAIN_SAW, rates, step_number)
        }
        LineItem::HandSaw(cut) => calculate_linear_cut(cut, &HAND_SAW, rates, step_number),
        LineItem::SlabSawing(cut) => calculate_linear_cut(cut, &SLAB_SAWING, rates, step_number),
        LineItem::StandaloneLabor(labor) => {
            calculate_standalone_labor(labor, rates, step_number)
        }
    }
}

/// Returns only the final cost of a line item.
pub fn item_cost(item: &LineItem, rates: &RateProfile) -> Decimal {
    calculate_item_cost(item, rates, 0).cost.final_cost
}
