//! Category aggregation.
//!
//! Sums item final costs within each service category, then sums the six
//! category totals into the services subtotal. Every item and every
//! category contributes, including zero and negative amounts.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CategoryTotals, ItemCost, ServiceCategory};

/// The result of aggregating item costs by category.
#[derive(Debug, Clone)]
pub struct CategoryTotalsResult {
    /// Per-category totals.
    pub totals: CategoryTotals,
    /// Sum of all category totals.
    pub services_subtotal: Decimal,
    /// One audit step per category followed by one for the services subtotal.
    pub audit_steps: Vec<AuditStep>,
}

/// Sums the final costs of the items in `category`.
///
/// An empty category totals zero.
pub fn category_total(item_costs: &[ItemCost], category: ServiceCategory) -> Decimal {
    item_costs
        .iter()
        .filter(|cost| cost.category == category)
        .map(|cost| cost.final_cost)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sums the six category totals.
pub fn services_subtotal(totals: &CategoryTotals) -> Decimal {
    totals
        .iter()
        .map(|(_, total)| total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Aggregates priced items into category totals and the services subtotal.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::{calculate_category_totals, calculate_item_cost};
/// use cutting_estimator::models::{LineItem, LinearCutItem, RateProfile, ServiceCategory};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
/// let cut = LinearCutItem {
///     id: Uuid::new_v4(),
///     description: String::new(),
///     quantity: dec!(1),
///     length_feet: dec!(25),
///     complexity_pct: dec!(0),
/// };
/// let costs = vec![
///     calculate_item_cost(&LineItem::SlabSawing(cut.clone()), &rates, 1).cost,
///     calculate_item_cost(&LineItem::SlabSawing(cut), &rates, 2).cost,
/// ];
///
/// let result = calculate_category_totals(&costs, 3);
/// assert_eq!(result.totals.get(ServiceCategory::SlabSawing), dec!(274));
/// assert_eq!(result.services_subtotal, dec!(274));
/// assert_eq!(result.audit_steps.len(), 7);
/// ```
pub fn calculate_category_totals(item_costs: &[ItemCost], step_number: u32) -> CategoryTotalsResult {
    let mut totals = CategoryTotals::default();
    let mut audit_steps = Vec::with_capacity(ServiceCategory::ALL.len() + 1);
    let mut step = step_number;

    for category in ServiceCategory::ALL {
        let costs: Vec<Decimal> = item_costs
            .iter()
            .filter(|cost| cost.category == category)
            .map(|cost| cost.final_cost)
            .collect();
        let total = costs.iter().fold(Decimal::ZERO, |sum, cost| sum.saturating_add(*cost));
        totals.set(category, total);

        let reasoning = if costs.is_empty() {
            format!("No {} items - total $0", category.label())
        } else {
            format!(
                "{} = ${}",
                costs
                    .iter()
                    .map(|c| format!("${}", c.normalize()))
                    .collect::<Vec<_>>()
                    .join(" + "),
                total.normalize()
            )
        };

        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: "category_total".to_string(),
            rule_name: format!("{} Total", category.label()),
            input: serde_json::json!({
                "category": category.as_str(),
                "item_count": costs.len()
            }),
            output: serde_json::json!({
                "total": total.normalize().to_string()
            }),
            reasoning,
        });
        step += 1;
    }

    let subtotal = services_subtotal(&totals);
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "services_subtotal".to_string(),
        rule_name: "Services Subtotal".to_string(),
        input: serde_json::Value::Object(
            totals
                .iter()
                .map(|(category, total)| {
                    (
                        category.as_str().to_string(),
                        serde_json::Value::from(total.normalize().to_string()),
                    )
                })
                .collect(),
        ),
        output: serde_json::json!({
            "services_subtotal": subtotal.normalize().to_string()
        }),
        reasoning: format!("Sum of six category totals = ${}", subtotal.normalize()),
    });

    CategoryTotalsResult {
        totals,
        services_subtotal: subtotal,
        audit_steps,
    }
}
