//! Complexity surcharge.
//!
//! Every line item, whatever its category, has its base cost scaled by the
//! same complexity multiplier.

use rust_decimal::Decimal;

/// Returns `1 + complexity_pct / 100`.
///
/// Out-of-range percentages are applied as given; a negative percentage
/// produces a discount and anything above 100 more than doubles the cost.
///
/// # Examples
///
/// ```
/// use cutting_estimator::calculation::complexity_multiplier;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(complexity_multiplier(dec!(0)), dec!(1));
/// assert_eq!(complexity_multiplier(dec!(20)), dec!(1.2));
/// assert_eq!(complexity_multiplier(dec!(100)), dec!(2));
/// ```
pub fn complexity_multiplier(complexity_pct: Decimal) -> Decimal {
    Decimal::ONE + complexity_pct / Decimal::ONE_HUNDRED
}

/// Applies the complexity multiplier to a base cost.
pub fn apply_complexity(base_cost: Decimal, complexity_pct: Decimal) -> Decimal {
    base_cost.saturating_mul(complexity_multiplier(complexity_pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_complexity_keeps_base_cost() {
        assert_eq!(apply_complexity(dec!(68.5), dec!(0)), dec!(68.5));
    }

    #[test]
    fn test_full_complexity_doubles_base_cost() {
        assert_eq!(apply_complexity(dec!(68.5), dec!(100)), dec!(137));
    }

    #[test]
    fn test_out_of_range_complexity_is_not_clamped() {
        assert_eq!(complexity_multiplier(dec!(150)), dec!(2.5));
        assert_eq!(complexity_multiplier(dec!(-50)), dec!(0.5));
        assert_eq!(apply_complexity(dec!(10), dec!(-50)), dec!(5));
    }

    #[test]
    fn test_fractional_complexity() {
        assert_eq!(complexity_multiplier(dec!(12.5)), dec!(1.125));
    }
}
