//! Rate profile model.
//!
//! A [`RateProfile`] holds the three base rates that parameterize every
//! downstream cost formula.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The base rates an estimate is priced with.
///
/// Rates are immutable for the duration of one estimate computation.
///
/// # Example
///
/// ```
/// use cutting_estimator::models::RateProfile;
/// use rust_decimal_macros::dec;
///
/// let rates = RateProfile::new(dec!(29), dec!(22), dec!(0.80));
/// assert_eq!(rates.technician_rate, dec!(29));
/// assert_eq!(rates.mileage_rate, dec!(0.80));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateProfile {
    /// Hourly rate for a cutting technician.
    pub technician_rate: Decimal,
    /// Hourly rate for a laborer (standalone labor, trainee travel).
    pub laborer_rate: Decimal,
    /// Rate charged per mile driven.
    pub mileage_rate: Decimal,
}

impl RateProfile {
    /// Creates a rate profile from its three rates.
    pub fn new(technician_rate: Decimal, laborer_rate: Decimal, mileage_rate: Decimal) -> Self {
        Self {
            technician_rate,
            laborer_rate,
            mileage_rate,
        }
    }

    /// Returns each rate with its field name, in declaration order.
    pub fn fields(&self) -> [(&'static str, Decimal); 3] {
        [
            ("technician_rate", self.technician_rate),
            ("laborer_rate", self.laborer_rate),
            ("mileage_rate", self.mileage_rate),
        ]
    }
}
