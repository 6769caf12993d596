//! The estimate pipeline.
//!
//! Prices every line item, aggregates by category, adds additional costs,
//! and composes the grand total. Each stage appends to one audit trace with
//! sequential step numbers.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EstimateInput, EstimateResult, EstimateTotals, ItemCost,
    LineItem,
};

use super::additional_costs::calculate_additional_costs;
use super::category_totals::calculate_category_totals;
use super::grand_total::calculate_grand_total;
use super::item_cost::calculate_item_cost;

/// Warning code for a complexity percentage outside 0 to 100.
pub const COMPLEXITY_OUT_OF_RANGE: &str = "COMPLEXITY_OUT_OF_RANGE";

/// Warning code for a negative quantity, dimension or hours value.
pub const NEGATIVE_ITEM_INPUT: &str = "NEGATIVE_ITEM_INPUT";

/// Warning code for an overtime premium that is recorded but not totaled.
pub const OVERTIME_PREMIUM_EXCLUDED: &str = "OVERTIME_PREMIUM_EXCLUDED";

/// Warning code for an amount pinned at the largest representable value.
pub const AMOUNT_SATURATED: &str = "AMOUNT_SATURATED";

/// Prices an estimate and returns the full result with breakdown and audit trace.
///
/// The input is only borrowed; the same input always yields the same totals.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::build_estimate;
/// use cutting_estimator::models::{EstimateInput, LineItem, RateProfile, StandaloneLaborItem};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let mut input = EstimateInput::new(RateProfile::new(dec!(29), dec!(22), dec!(0.80)));
/// input.line_items.push(LineItem::StandaloneLabor(StandaloneLaborItem {
///     id: Uuid::new_v4(),
///     description: "Cleanup".to_string(),
///     hours: dec!(8),
///     complexity_pct: dec!(0),
/// }));
///
/// let result = build_estimate(&input);
/// assert_eq!(result.totals.services_subtotal, dec!(176));
/// assert_eq!(result.totals.shop_fee, dec!(26.4));
/// assert_eq!(result.totals.grand_total, dec!(202.4));
/// ```
pub fn build_estimate(input: &EstimateInput) -> EstimateResult {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let mut items: Vec<ItemCost> = Vec::with_capacity(input.line_items.len());
    for item in &input.line_items {
        let priced = calculate_item_cost(item, &input.rates, step_number);
        debug!(
            item_id = %priced.cost.item_id,
            category = priced.cost.category.as_str(),
            final_cost = %priced.cost.final_cost,
            "Priced line item"
        );
        items.push(priced.cost);
        steps.push(priced.audit_step);
        step_number += 1;
    }

    let category_result = calculate_category_totals(&items, step_number);
    step_number += category_result.audit_steps.len() as u32;
    steps.extend(category_result.audit_steps);

    let additional = calculate_additional_costs(
        &input.additional_costs,
        &input.rates,
        category_result.services_subtotal,
        step_number,
    );
    steps.push(additional.audit_step);
    step_number += 1;

    let grand = calculate_grand_total(
        category_result.services_subtotal,
        additional.total,
        step_number,
    );
    steps.push(grand.audit_step);

    let totals = EstimateTotals {
        categories: category_result.totals,
        services_subtotal: category_result.services_subtotal,
        shop_fee: additional.shop_fee,
        mileage_cost: additional.mileage_cost,
        travel_cost: additional.travel_cost,
        equipment_cost: additional.equipment_cost,
        outside_labor_cost: additional.outside_labor_cost,
        additional_costs_total: additional.total,
        grand_total: grand.grand_total,
    };

    let mut warnings = collect_warnings(input);
    warnings.extend(saturation_warning(&totals));
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        items = items.len(),
        warnings = warnings.len(),
        grand_total = %totals.grand_total,
        duration_us,
        "Estimate computed"
    );

    EstimateResult {
        estimate_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rates: input.rates,
        items,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Prices an estimate and returns only its totals.
pub fn calculate_estimate(input: &EstimateInput) -> EstimateTotals {
    build_estimate(input).totals
}

/// Flags inputs that were priced as given but look unusual.
fn collect_warnings(input: &EstimateInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    for item in &input.line_items {
        let complexity = item.complexity_pct();
        if complexity < Decimal::ZERO || complexity > Decimal::ONE_HUNDRED {
            warnings.push(AuditWarning {
                code: COMPLEXITY_OUT_OF_RANGE.to_string(),
                message: format!(
                    "{} item {} has complexity {}%, outside 0-100%",
                    item.category().label(),
                    item.id(),
                    complexity.normalize()
                ),
                severity: "medium".to_string(),
            });
        }

        warnings.extend(negative_input_warnings(item));
    }

    let overtime_premium = input.additional_costs.overtime_premium;
    if !overtime_premium.is_zero() {
        warnings.push(AuditWarning {
            code: OVERTIME_PREMIUM_EXCLUDED.to_string(),
            message: format!(
                "Overtime premium of ${} is recorded but not included in the total",
                overtime_premium.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}

/// Flags a grand total that hit the `Decimal` range limit.
///
/// Saturation propagates through every sum, so checking the grand total
/// catches an overflow anywhere upstream unless a negative amount cancels it.
fn saturation_warning(totals: &EstimateTotals) -> Option<AuditWarning> {
    let grand_total = totals.grand_total;
    (grand_total == Decimal::MAX || grand_total == Decimal::MIN).then(|| AuditWarning {
        code: AMOUNT_SATURATED.to_string(),
        message: format!(
            "Grand total reached the largest representable amount (${}); an input is out of range",
            grand_total
        ),
        severity: "high".to_string(),
    })
}

fn negative_input_warnings(item: &LineItem) -> impl Iterator<Item = AuditWarning> + '_ {
    item.cost_inputs()
        .into_iter()
        .filter(|(_, value)| value.is_sign_negative() && !value.is_zero())
        .map(move |(field, value)| AuditWarning {
            code: NEGATIVE_ITEM_INPUT.to_string(),
            message: format!(
                "{} item {} has negative {} ({})",
                item.category().label(),
                item.id(),
                field,
                value.normalize()
            ),
            severity: "medium".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AdditionalCosts, CoreDrillingItem, LinearCutItem, RateProfile, ServiceCategory,
        StandaloneLaborItem, WallSawingItem,
    };
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> RateProfile {
        RateProfile::new(dec("29"), dec("22"), dec("0.80"))
    }

    fn core_drilling(quantity: &str, depth_inches: &str, complexity_pct: &str) -> LineItem {
        LineItem::CoreDrilling(CoreDrillingItem {
            id: Uuid::new_v4(),
            description: "Core holes".to_string(),
            quantity: dec(quantity),
            depth_inches: dec(depth_inches),
            complexity_pct: dec(complexity_pct),
            width: Decimal::ZERO,
            length_interval: Decimal::ZERO,
            width_interval: Decimal::ZERO,
        })
    }

    fn wall_sawing(quantity: &str, length_feet: &str, depth_inches: &str, complexity_pct: &str) -> LineItem {
        LineItem::WallSawing(WallSawingItem {
            id: Uuid::new_v4(),
            description: "Wall opening".to_string(),
            quantity: dec(quantity),
            length_feet: dec(length_feet),
            depth_inches: dec(depth_inches),
            complexity_pct: dec(complexity_pct),
        })
    }

    fn labor(hours: &str) -> LineItem {
        LineItem::StandaloneLabor(StandaloneLaborItem {
            id: Uuid::new_v4(),
            description: "Cleanup".to_string(),
            hours: dec(hours),
            complexity_pct: Decimal::ZERO,
        })
    }

    #[test]
    fn test_empty_estimate_is_all_zero() {
        let totals = calculate_estimate(&EstimateInput::new(rates()));

        for (_, total) in totals.categories.iter() {
            assert_eq!(total, Decimal::ZERO);
        }
        assert_eq!(totals.services_subtotal, Decimal::ZERO);
        assert_eq!(totals.shop_fee, Decimal::ZERO);
        assert_eq!(totals.mileage_cost, Decimal::ZERO);
        assert_eq!(totals.additional_costs_total, Decimal::ZERO);
        assert_eq!(totals.grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_core_drilling_scenario() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(core_drilling("6", "20", "0"));

        let totals = calculate_estimate(&input);

        assert_eq!(totals.categories.core_drilling, dec("68.5"));
        assert_eq!(totals.services_subtotal, dec("68.5"));
        assert_eq!(totals.shop_fee, dec("10.275"));
        assert_eq!(totals.grand_total, dec("78.775"));
    }

    #[test]
    fn test_wall_sawing_with_mileage_scenario() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(wall_sawing("1", "4", "8", "20"));
        input.additional_costs = AdditionalCosts {
            mileage_distance: dec("50"),
            ..AdditionalCosts::default()
        };

        let totals = calculate_estimate(&input);

        assert_eq!(totals.categories.wall_sawing.round_dp(3), dec("18.733"));
        assert_eq!(totals.mileage_cost, dec("80"));
        assert_eq!(
            totals.grand_total,
            totals.services_subtotal + totals.additional_costs_total
        );
        assert_eq!(totals.rounded().grand_total, dec("101.54"));
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_additional() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(core_drilling("12", "12", "0"));
        input.line_items.push(labor("8"));
        input.additional_costs = AdditionalCosts {
            tech_travel_hours: dec("2"),
            equipment_man_nights: dec("1"),
            adjustments: dec("-40"),
            ..AdditionalCosts::default()
        };

        let totals = calculate_estimate(&input);

        // 82.2 + 176
        assert_eq!(totals.services_subtotal, dec("258.2"));
        // 38.73 shop + 58 travel + 150 equipment - 40
        assert_eq!(totals.additional_costs_total, dec("206.73"));
        assert_eq!(totals.grand_total, dec("464.93"));
    }

    #[test]
    fn test_items_keep_input_order() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(labor("1"));
        input.line_items.push(core_drilling("1", "12", "0"));
        input.line_items.push(labor("2"));

        let result = build_estimate(&input);
        let categories: Vec<ServiceCategory> = result.items.iter().map(|i| i.category).collect();

        assert_eq!(
            categories,
            vec![
                ServiceCategory::StandaloneLabor,
                ServiceCategory::CoreDrilling,
                ServiceCategory::StandaloneLabor
            ]
        );
        assert_eq!(result.items[0].item_id, input.line_items[0].id());
    }

    #[test]
    fn test_audit_trace_structure() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(labor("1"));
        input.line_items.push(labor("2"));

        let result = build_estimate(&input);
        let steps = &result.audit_trace.steps;

        // 2 items + 6 categories + subtotal + additional + grand total
        assert_eq!(steps.len(), 11);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
        assert_eq!(steps[0].rule_id, "standalone_labor_cost");
        assert_eq!(steps[8].rule_id, "services_subtotal");
        assert_eq!(steps[9].rule_id, "additional_costs");
        assert_eq!(steps[10].rule_id, "grand_total");
    }

    #[test]
    fn test_envelope_fields() {
        let result = build_estimate(&EstimateInput::new(rates()));

        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.rates, rates());
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_same_input_gives_same_totals() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(wall_sawing("3", "7.5", "10", "35"));
        input.line_items.push(core_drilling("4", "9", "10"));

        assert_eq!(calculate_estimate(&input), calculate_estimate(&input));
    }

    #[test]
    fn test_complexity_out_of_range_warns_but_prices() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(core_drilling("6", "20", "150"));
        input.line_items.push(core_drilling("6", "20", "-10"));

        let result = build_estimate(&input);
        let codes: Vec<&str> = result
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();

        assert_eq!(codes, vec![COMPLEXITY_OUT_OF_RANGE, COMPLEXITY_OUT_OF_RANGE]);
        // 68.5 x 2.5 + 68.5 x 0.9
        assert_eq!(result.totals.categories.core_drilling, dec!(232.9));
    }

    #[test]
    fn test_boundary_complexity_does_not_warn() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(core_drilling("1", "12", "0"));
        input.line_items.push(core_drilling("1", "12", "100"));

        let result = build_estimate(&input);
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_negative_inputs_warn() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(LineItem::HandSaw(LinearCutItem {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: dec!(-1),
            length_feet: dec!(-10),
            complexity_pct: dec!(0),
        }));

        let result = build_estimate(&input);
        let warnings = &result.audit_trace.warnings;

        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code == NEGATIVE_ITEM_INPUT));
        assert!(warnings[0].message.contains("quantity"));
        assert!(warnings[1].message.contains("length_feet"));
        // -1 x -10 = 10 ft, priced as given
        assert_eq!(result.totals.categories.hand_saw, dec!(82.2));
    }

    #[test]
    fn test_overtime_premium_warns_and_is_not_totaled() {
        let mut input = EstimateInput::new(rates());
        input.additional_costs.overtime_premium = dec!(250);

        let result = build_estimate(&input);

        assert_eq!(result.totals.grand_total, Decimal::ZERO);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, OVERTIME_PREMIUM_EXCLUDED);
    }

    #[test]
    fn test_oversized_inputs_saturate_with_warning() {
        let huge = Decimal::from(1_000_000_000_000_000_i64);
        let mut input = EstimateInput::new(rates());
        input.line_items.push(LineItem::SlabSawing(LinearCutItem {
            id: Uuid::new_v4(),
            description: "Runaway slab".to_string(),
            quantity: huge,
            length_feet: huge,
            complexity_pct: dec!(15),
        }));
        input.line_items.push(labor("8"));

        let result = build_estimate(&input);

        assert_eq!(result.totals.categories.slab_sawing, Decimal::MAX);
        assert_eq!(result.totals.categories.standalone_labor, dec!(176));
        assert_eq!(result.totals.services_subtotal, Decimal::MAX);
        assert_eq!(result.totals.grand_total, Decimal::MAX);
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == AMOUNT_SATURATED)
        );
    }

    #[test]
    fn test_ordinary_estimate_has_no_saturation_warning() {
        let mut input = EstimateInput::new(rates());
        input.line_items.push(core_drilling("6", "20", "0"));

        let result = build_estimate(&input);

        assert!(result.audit_trace.warnings.is_empty());
    }
}
