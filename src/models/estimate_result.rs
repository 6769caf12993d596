//! Estimate result models.
//!
//! This module contains the [`EstimateResult`] type and its associated structures
//! that capture all outputs of an estimate: per-item cost breakdowns, category
//! totals, additional costs, the grand total, and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RateProfile, ServiceCategory, round_money};

/// The unit of an item's derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedUnit {
    /// Linear feet drilled (core drilling).
    Footage,
    /// Square feet of cut face (wall sawing).
    SquareFeet,
    /// Linear feet of cut.
    LinearFeet,
    /// Labor hours given directly.
    Hours,
}

/// The full cost breakdown of one line item.
///
/// # Example
///
/// ```
/// use cutting_estimator::models::{DerivedUnit, ItemCost, ServiceCategory};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let cost = ItemCost {
///     item_id: Uuid::nil(),
///     category: ServiceCategory::CoreDrilling,
///     description: "Floor penetrations".to_string(),
///     derived_quantity: dec!(10),
///     derived_unit: DerivedUnit::Footage,
///     labor_hours: dec!(1.5),
///     labor_cost: dec!(43.5),
///     wear_cost: dec!(25),
///     base_cost: dec!(68.5),
///     complexity_multiplier: dec!(1),
///     final_cost: dec!(68.5),
/// };
/// assert_eq!(cost.base_cost, cost.labor_cost + cost.wear_cost);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCost {
    /// The identity of the priced item.
    pub item_id: Uuid,
    /// The item's category.
    pub category: ServiceCategory,
    /// The item's description.
    pub description: String,
    /// Footage, area, linear feet or hours, depending on the category.
    pub derived_quantity: Decimal,
    /// The unit of `derived_quantity`.
    pub derived_unit: DerivedUnit,
    /// Labor hours the item requires.
    pub labor_hours: Decimal,
    /// Labor hours priced at the applicable hourly rate.
    pub labor_cost: Decimal,
    /// Blade and bit wear cost.
    pub wear_cost: Decimal,
    /// Labor plus wear, before complexity.
    pub base_cost: Decimal,
    /// `1 + complexity_pct / 100`.
    pub complexity_multiplier: Decimal,
    /// Base cost times the complexity multiplier.
    pub final_cost: Decimal,
}

/// Totals for each of the six service categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Core drilling total.
    pub core_drilling: Decimal,
    /// Wall sawing total.
    pub wall_sawing: Decimal,
    /// Hand-held chain saw total.
    pub hand_held_chain_saw: Decimal,
    /// Hand saw total.
    pub hand_saw: Decimal,
    /// Slab sawing total.
    pub slab_sawing: Decimal,
    /// Standalone labor total.
    pub standalone_labor: Decimal,
}

impl CategoryTotals {
    /// Returns the total for `category`.
    pub fn get(&self, category: ServiceCategory) -> Decimal {
        match category {
            ServiceCategory::CoreDrilling => self.core_drilling,
            ServiceCategory::WallSawing => self.wall_sawing,
            ServiceCategory::HandHeldChainSaw => self.hand_held_chain_saw,
            ServiceCategory::HandSaw => self.hand_saw,
            ServiceCategory::SlabSawing => self.slab_sawing,
            ServiceCategory::StandaloneLabor => self.standalone_labor,
        }
    }

    /// Sets the total for `category`.
    pub fn set(&mut self, category: ServiceCategory, total: Decimal) {
        let slot = match category {
            ServiceCategory::CoreDrilling => &mut self.core_drilling,
            ServiceCategory::WallSawing => &mut self.wall_sawing,
            ServiceCategory::HandHeldChainSaw => &mut self.hand_held_chain_saw,
            ServiceCategory::HandSaw => &mut self.hand_saw,
            ServiceCategory::SlabSawing => &mut self.slab_sawing,
            ServiceCategory::StandaloneLabor => &mut self.standalone_labor,
        };
        *slot = total;
    }

    /// Iterates `(category, total)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceCategory, Decimal)> + '_ {
        ServiceCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

/// All named totals of an estimate.
///
/// Amounts are full precision. Use [`EstimateTotals::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateTotals {
    /// Per-category totals.
    pub categories: CategoryTotals,
    /// Sum of all category totals.
    pub services_subtotal: Decimal,
    /// 15% overhead on the services subtotal.
    pub shop_fee: Decimal,
    /// Round-trip mileage cost.
    pub mileage_cost: Decimal,
    /// Technician and trainee travel cost.
    pub travel_cost: Decimal,
    /// Equipment man-night cost.
    pub equipment_cost: Decimal,
    /// Outside labor cost.
    pub outside_labor_cost: Decimal,
    /// Computed additional costs plus manual entries.
    pub additional_costs_total: Decimal,
    /// Services subtotal plus additional costs total.
    pub grand_total: Decimal,
}

impl EstimateTotals {
    /// Returns a copy with every amount rounded to cents.
    ///
    /// Each amount is rounded on its own, so rounded subtotals may not add up
    /// to the rounded grand total to the cent.
    pub fn rounded(&self) -> Self {
        let mut categories = CategoryTotals::default();
        for (category, total) in self.categories.iter() {
            categories.set(category, round_money(total));
        }

        Self {
            categories,
            services_subtotal: round_money(self.services_subtotal),
            shop_fee: round_money(self.shop_fee),
            mileage_cost: round_money(self.mileage_cost),
            travel_cost: round_money(self.travel_cost),
            equipment_cost: round_money(self.equipment_cost),
            outside_labor_cost: round_money(self.outside_labor_cost),
            additional_costs_total: round_money(self.additional_costs_total),
            grand_total: round_money(self.grand_total),
        }
    }
}

/// A single step in the audit trace recording a pricing decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the arithmetic.
    pub reasoning: String,
}

/// A warning about input that was priced as given but looks unusual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an estimate.
///
/// # Example
///
/// ```
/// use cutting_estimator::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while pricing.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of pricing an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Unique identifier for this computation.
    pub estimate_id: Uuid,
    /// When the estimate was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the estimate.
    pub engine_version: String,
    /// The rates the estimate was priced with.
    pub rates: RateProfile,
    /// Cost breakdown for every line item, in input order.
    pub items: Vec<ItemCost>,
    /// All named totals.
    pub totals: EstimateTotals,
    /// Complete audit trace of pricing decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_totals() -> EstimateTotals {
        let mut categories = CategoryTotals::default();
        categories.set(ServiceCategory::CoreDrilling, dec!(68.5));
        categories.set(ServiceCategory::WallSawing, dec!(18.73333));

        EstimateTotals {
            categories,
            services_subtotal: dec!(87.23333),
            shop_fee: dec!(13.0849995),
            mileage_cost: dec!(80),
            travel_cost: dec!(0),
            equipment_cost: dec!(0),
            outside_labor_cost: dec!(0),
            additional_costs_total: dec!(93.0849995),
            grand_total: dec!(180.3183295),
        }
    }

    #[test]
    fn test_category_totals_get_and_set() {
        let mut totals = CategoryTotals::default();
        totals.set(ServiceCategory::HandSaw, dec!(42));

        assert_eq!(totals.get(ServiceCategory::HandSaw), dec!(42));
        assert_eq!(totals.hand_saw, dec!(42));
        assert_eq!(totals.get(ServiceCategory::SlabSawing), dec!(0));
    }

    #[test]
    fn test_category_totals_iter_covers_all_categories() {
        let totals = CategoryTotals::default();
        let categories: Vec<ServiceCategory> = totals.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, ServiceCategory::ALL.to_vec());
    }

    #[test]
    fn test_rounded_rounds_each_amount_to_cents() {
        let rounded = sample_totals().rounded();

        assert_eq!(rounded.categories.wall_sawing, dec!(18.73));
        assert_eq!(rounded.categories.core_drilling, dec!(68.50));
        assert_eq!(rounded.shop_fee, dec!(13.08));
        assert_eq!(rounded.grand_total, dec!(180.32));
    }

    #[test]
    fn test_rounded_leaves_original_untouched() {
        let totals = sample_totals();
        let _ = totals.rounded();
        assert_eq!(totals.categories.wall_sawing, dec!(18.73333));
    }

    #[test]
    fn test_derived_unit_serialization() {
        assert_eq!(
            serde_json::to_string(&DerivedUnit::SquareFeet).unwrap(),
            "\"square_feet\""
        );
        assert_eq!(
            serde_json::to_string(&DerivedUnit::LinearFeet).unwrap(),
            "\"linear_feet\""
        );
    }

    #[test]
    fn test_estimate_totals_round_trip_through_json() {
        let totals = sample_totals();
        let json = serde_json::to_string(&totals).unwrap();
        let parsed: EstimateTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, totals);
    }
}
