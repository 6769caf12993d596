//! Grand total composition.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The grand total and the audit step that records it.
#[derive(Debug, Clone)]
pub struct GrandTotalResult {
    /// Services subtotal plus additional costs total.
    pub grand_total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Adds the services subtotal and the additional-costs total.
///
/// ```
/// use cutting_estimator::calculation::calculate_grand_total;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_grand_total(dec!(1000), dec!(230), 1);
/// assert_eq!(result.grand_total, dec!(1230));
/// ```
pub fn calculate_grand_total(
    services_subtotal: Decimal,
    additional_costs_total: Decimal,
    step_number: u32,
) -> GrandTotalResult {
    let grand_total = services_subtotal.saturating_add(additional_costs_total);

    GrandTotalResult {
        grand_total,
        audit_step: AuditStep {
            step_number,
            rule_id: "grand_total".to_string(),
            rule_name: "Grand Total".to_string(),
            input: serde_json::json!({
                "services_subtotal": services_subtotal.normalize().to_string(),
                "additional_costs_total": additional_costs_total.normalize().to_string()
            }),
            output: serde_json::json!({
                "grand_total": grand_total.normalize().to_string()
            }),
            reasoning: format!(
                "${} services + ${} additional = ${}",
                services_subtotal.normalize(),
                additional_costs_total.normalize(),
                grand_total.normalize()
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grand_total_is_exact_sum() {
        let result = calculate_grand_total(dec!(18.7333333333), dec!(82.81), 9);

        assert_eq!(result.grand_total, dec!(101.5433333333));
        assert_eq!(result.audit_step.step_number, 9);
        assert_eq!(result.audit_step.output["grand_total"], "101.5433333333");
    }

    #[test]
    fn test_negative_additional_costs_reduce_grand_total() {
        let result = calculate_grand_total(dec!(100), dec!(-150), 1);
        assert_eq!(result.grand_total, dec!(-50));
    }

    #[test]
    fn test_reasoning_shows_both_terms() {
        let result = calculate_grand_total(dec!(1000), dec!(230), 1);
        assert_eq!(result.audit_step.reasoning, "$1000 services + $230 additional = $1230");
    }
}
