//! Additional cost calculation.
//!
//! Derives the shop fee, mileage, travel, equipment and outside-labor costs,
//! then adds the manually entered amounts to produce the additional-costs total.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AdditionalCosts, AuditStep, RateProfile};

/// Shop fee as a fraction of the services subtotal.
pub const SHOP_FEE_RATE: Decimal = dec!(0.15);

/// Mileage is always billed for the return leg as well.
pub const ROUND_TRIP_FACTOR: Decimal = dec!(2);

/// Flat charge per equipment man-night.
pub const EQUIPMENT_RATE_PER_MAN_NIGHT: Decimal = dec!(150);

/// The result of calculating additional costs.
#[derive(Debug, Clone)]
pub struct AdditionalCostsResult {
    /// 15% of the services subtotal.
    pub shop_fee: Decimal,
    /// Round-trip mileage.
    pub mileage_cost: Decimal,
    /// Technician and trainee travel.
    pub travel_cost: Decimal,
    /// Equipment man-nights.
    pub equipment_cost: Decimal,
    /// Outside labor.
    pub outside_labor_cost: Decimal,
    /// Sum of the manually entered amounts.
    pub manual_total: Decimal,
    /// Computed costs plus manual entries.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// `services_subtotal × 0.15`.
///
/// ```
/// use cutting_estimator::calculation::calculate_shop_fee;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_shop_fee(dec!(1000)), dec!(150));
/// ```
pub fn calculate_shop_fee(services_subtotal: Decimal) -> Decimal {
    services_subtotal.saturating_mul(SHOP_FEE_RATE)
}

/// `mileage_distance × mileage_trips × mileage_rate × 2`.
pub fn calculate_mileage_cost(costs: &AdditionalCosts, rates: &RateProfile) -> Decimal {
    costs
        .mileage_distance
        .saturating_mul(costs.mileage_trips)
        .saturating_mul(rates.mileage_rate)
        .saturating_mul(ROUND_TRIP_FACTOR)
}

/// Technician travel at the technician rate plus trainee travel at the laborer rate.
pub fn calculate_travel_cost(costs: &AdditionalCosts, rates: &RateProfile) -> Decimal {
    let tech = costs.tech_travel_hours.saturating_mul(rates.technician_rate);
    let trainee = costs.trainee_travel_hours.saturating_mul(rates.laborer_rate);
    tech.saturating_add(trainee)
}

/// `equipment_man_nights × 150`.
pub fn calculate_equipment_cost(costs: &AdditionalCosts) -> Decimal {
    costs.equipment_man_nights.saturating_mul(EQUIPMENT_RATE_PER_MAN_NIGHT)
}

/// `outside_laborer_hours × outside_laborer_rate`.
pub fn calculate_outside_labor_cost(costs: &AdditionalCosts) -> Decimal {
    costs.outside_laborer_hours.saturating_mul(costs.outside_laborer_rate)
}

/// Calculates every additional cost and their total.
///
/// `overtime_premium` is carried on the record but not added to the total.
/// `adjustments` is added as given, including negative corrections.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::calculate_additional_costs;
/// use cutting_estimator::models::{AdditionalCosts, RateProfile};
/// use rust_decimal_macros::dec;
///
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
/// let costs = AdditionalCosts {
///     mileage_distance: dec!(50),
///     ..AdditionalCosts::default()
/// };
///
/// let result = calculate_additional_costs(&costs, &rates, dec!(1000), 1);
/// assert_eq!(result.mileage_cost, dec!(80));
/// assert_eq!(result.shop_fee, dec!(150));
/// assert_eq!(result.total, dec!(230));
/// ```
pub fn calculate_additional_costs(
    costs: &AdditionalCosts,
    rates: &RateProfile,
    services_subtotal: Decimal,
    step_number: u32,
) -> AdditionalCostsResult {
    let shop_fee = calculate_shop_fee(services_subtotal);
    let mileage_cost = calculate_mileage_cost(costs, rates);
    let travel_cost = calculate_travel_cost(costs, rates);
    let equipment_cost = calculate_equipment_cost(costs);
    let outside_labor_cost = calculate_outside_labor_cost(costs);

    let manual_entries = costs.manual_entries();
    let manual_total = manual_entries
        .iter()
        .fold(Decimal::ZERO, |sum, (_, amount)| sum.saturating_add(*amount));

    let computed_total = [shop_fee, mileage_cost, travel_cost, equipment_cost, outside_labor_cost]
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let total = computed_total.saturating_add(manual_total);

    let manual_json: serde_json::Map<String, serde_json::Value> = manual_entries
        .iter()
        .map(|(name, amount)| {
            (
                name.to_string(),
                serde_json::Value::from(amount.normalize().to_string()),
            )
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "additional_costs".to_string(),
        rule_name: "Additional Costs".to_string(),
        input: serde_json::json!({
            "services_subtotal": services_subtotal.normalize().to_string(),
            "mileage_distance": costs.mileage_distance.normalize().to_string(),
            "mileage_trips": costs.mileage_trips.normalize().to_string(),
            "mileage_rate": rates.mileage_rate.normalize().to_string(),
            "tech_travel_hours": costs.tech_travel_hours.normalize().to_string(),
            "trainee_travel_hours": costs.trainee_travel_hours.normalize().to_string(),
            "equipment_man_nights": costs.equipment_man_nights.normalize().to_string(),
            "outside_laborer_hours": costs.outside_laborer_hours.normalize().to_string(),
            "outside_laborer_rate": costs.outside_laborer_rate.normalize().to_string(),
            "overtime_premium": costs.overtime_premium.normalize().to_string(),
            "manual_entries": manual_json
        }),
        output: serde_json::json!({
            "shop_fee": shop_fee.normalize().to_string(),
            "mileage_cost": mileage_cost.normalize().to_string(),
            "travel_cost": travel_cost.normalize().to_string(),
            "equipment_cost": equipment_cost.normalize().to_string(),
            "outside_labor_cost": outside_labor_cost.normalize().to_string(),
            "manual_total": manual_total.normalize().to_string(),
            "additional_costs_total": total.normalize().to_string()
        }),
        reasoning: format!(
            "shop ${} + mileage ${} + travel ${} + equipment ${} + outside labor ${} + manual ${} = ${}",
            shop_fee.normalize(),
            mileage_cost.normalize(),
            travel_cost.normalize(),
            equipment_cost.normalize(),
            outside_labor_cost.normalize(),
            manual_total.normalize(),
            total.normalize()
        ),
    };

    AdditionalCostsResult {
        shop_fee,
        mileage_cost,
        travel_cost,
        equipment_cost,
        outside_labor_cost,
        manual_total,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateProfile {
        RateProfile::new(dec!(29), dec!(22), dec!(0.80))
    }

    #[test]
    fn test_defaults_produce_zero_total() {
        let result = calculate_additional_costs(&AdditionalCosts::default(), &rates(), dec!(0), 1);

        assert_eq!(result.shop_fee, Decimal::ZERO);
        assert_eq!(result.mileage_cost, Decimal::ZERO);
        assert_eq!(result.travel_cost, Decimal::ZERO);
        assert_eq!(result.equipment_cost, Decimal::ZERO);
        assert_eq!(result.outside_labor_cost, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_mileage_is_round_trip() {
        let costs = AdditionalCosts {
            mileage_distance: dec!(50),
            mileage_trips: dec!(1),
            ..AdditionalCosts::default()
        };
        assert_eq!(calculate_mileage_cost(&costs, &rates()), dec!(80));
    }

    #[test]
    fn test_mileage_scales_with_trips() {
        let costs = AdditionalCosts {
            mileage_distance: dec!(50),
            mileage_trips: dec!(3),
            ..AdditionalCosts::default()
        };
        assert_eq!(calculate_mileage_cost(&costs, &rates()), dec!(240));
    }

    #[test]
    fn test_travel_uses_both_rates() {
        let costs = AdditionalCosts {
            tech_travel_hours: dec!(2),
            trainee_travel_hours: dec!(3),
            ..AdditionalCosts::default()
        };
        // 2 x $29 + 3 x $22
        assert_eq!(calculate_travel_cost(&costs, &rates()), dec!(124));
    }

    #[test]
    fn test_equipment_cost_per_man_night() {
        let costs = AdditionalCosts {
            equipment_man_nights: dec!(4),
            ..AdditionalCosts::default()
        };
        assert_eq!(calculate_equipment_cost(&costs), dec!(600));
    }

    #[test]
    fn test_outside_labor_uses_its_own_rate() {
        let costs = AdditionalCosts {
            outside_laborer_rate: dec!(45),
            outside_laborer_hours: dec!(10),
            ..AdditionalCosts::default()
        };
        assert_eq!(calculate_outside_labor_cost(&costs), dec!(450));
    }

    #[test]
    fn test_manual_entries_pass_through() {
        let costs = AdditionalCosts {
            per_diems: dec!(100),
            slurry_disposal: dec!(75),
            avetta_fee: dec!(25),
            isn_fee: dec!(30),
            materials: dec!(210.5),
            equipment_rentals: dec!(300),
            trucking: dec!(120),
            dump_fees: dec!(60),
            adjustments: dec!(0),
            ..AdditionalCosts::default()
        };
        let result = calculate_additional_costs(&costs, &rates(), dec!(0), 1);

        assert_eq!(result.manual_total, dec!(920.5));
        assert_eq!(result.total, dec!(920.5));
    }

    #[test]
    fn test_negative_adjustment_is_not_clamped() {
        let costs = AdditionalCosts {
            materials: dec!(100),
            adjustments: dec!(-250),
            ..AdditionalCosts::default()
        };
        let result = calculate_additional_costs(&costs, &rates(), dec!(0), 1);

        assert_eq!(result.total, dec!(-150));
    }

    #[test]
    fn test_overtime_premium_is_excluded_from_total() {
        let costs = AdditionalCosts {
            overtime_premium: dec!(500),
            ..AdditionalCosts::default()
        };
        let result = calculate_additional_costs(&costs, &rates(), dec!(1000), 1);

        assert_eq!(result.total, dec!(150));
        assert_eq!(result.audit_step.input["overtime_premium"], "500");
    }

    #[test]
    fn test_total_combines_computed_and_manual_costs() {
        let costs = AdditionalCosts {
            mileage_distance: dec!(50),
            tech_travel_hours: dec!(1),
            equipment_man_nights: dec!(1),
            outside_laborer_rate: dec!(40),
            outside_laborer_hours: dec!(2),
            per_diems: dec!(60),
            ..AdditionalCosts::default()
        };
        let result = calculate_additional_costs(&costs, &rates(), dec!(1000), 5);

        // 150 + 80 + 29 + 150 + 80 + 60
        assert_eq!(result.total, dec!(549));
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.output["additional_costs_total"], "549");
    }

    #[test]
    fn test_oversized_mileage_saturates() {
        let huge = Decimal::from(1_000_000_000_000_000_i64);
        let costs = AdditionalCosts {
            mileage_distance: huge,
            mileage_trips: huge,
            adjustments: dec!(-100),
            ..AdditionalCosts::default()
        };
        let result = calculate_additional_costs(&costs, &rates(), Decimal::MAX, 1);

        assert_eq!(result.mileage_cost, Decimal::MAX);
        assert_eq!(result.shop_fee, Decimal::MAX * dec!(0.15));
        assert_eq!(result.total, Decimal::MAX - dec!(100));
    }
}
