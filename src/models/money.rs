//! Display rounding for monetary amounts.
//!
//! The engine computes at full precision. Rounding happens only when a
//! consumer asks for display values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places money is displayed with.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents using banker's rounding (round half to even).
///
/// # Examples
///
/// ```
/// use cutting_estimator::models::round_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_money(dec!(18.7333)), dec!(18.73));
/// assert_eq!(round_money(dec!(0.125)), dec!(0.12));
/// assert_eq!(round_money(dec!(0.135)), dec!(0.14));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
