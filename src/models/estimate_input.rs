//! The complete input snapshot for one estimate computation.

use serde::{Deserialize, Serialize};

use super::{AdditionalCosts, LineItem, RateProfile, ServiceCategory};

/// Everything the engine needs to price a job.
///
/// The engine only ever borrows an `EstimateInput`; callers are free to keep
/// mutating their own copy between computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Rates the estimate is priced with.
    pub rates: RateProfile,
    /// All line items, in any order and any mix of categories.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Additional cost factors.
    #[serde(default)]
    pub additional_costs: AdditionalCosts,
}

impl EstimateInput {
    /// Creates an input with no line items and default additional costs.
    pub fn new(rates: RateProfile) -> Self {
        Self {
            rates,
            line_items: Vec::new(),
            additional_costs: AdditionalCosts::default(),
        }
    }

    /// Returns the line items that belong to `category`, in input order.
    pub fn items_in(&self, category: ServiceCategory) -> impl Iterator<Item = &LineItem> {
        self.line_items
            .iter()
            .filter(move |item| item.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinearCutItem, StandaloneLaborItem};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_items_in_filters_by_category() {
        let mut input = EstimateInput::new(RateProfile::new(dec!(29), dec!(22), dec!(0.8)));
        input.line_items.push(LineItem::HandSaw(LinearCutItem {
            id: Uuid::new_v4(),
            description: String::new(),
            quantity: dec!(1),
            length_feet: dec!(10),
            complexity_pct: dec!(0),
        }));
        input
            .line_items
            .push(LineItem::StandaloneLabor(StandaloneLaborItem {
                id: Uuid::new_v4(),
                description: String::new(),
                hours: dec!(2),
                complexity_pct: dec!(0),
            }));

        assert_eq!(input.items_in(ServiceCategory::HandSaw).count(), 1);
        assert_eq!(input.items_in(ServiceCategory::StandaloneLabor).count(), 1);
        assert_eq!(input.items_in(ServiceCategory::CoreDrilling).count(), 0);
    }
}
