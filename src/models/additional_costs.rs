//! Additional cost factors attached to an estimate.
//!
//! These are the non-item costs of a job: travel, mileage, equipment,
//! outside labor, and a set of manually entered fees.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The additional-costs record of an estimate.
///
/// Every field defaults to zero except `mileage_trips`, which defaults to one.
///
/// # Example
///
/// ```
/// use cutting_estimator::models::AdditionalCosts;
/// use rust_decimal::Decimal;
///
/// let costs = AdditionalCosts::default();
/// assert_eq!(costs.mileage_trips, Decimal::ONE);
/// assert_eq!(costs.mileage_distance, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalCosts {
    /// One-way distance to the job site in miles.
    pub mileage_distance: Decimal,
    /// Number of round trips to the job site.
    pub mileage_trips: Decimal,
    /// Technician travel hours, billed at the technician rate.
    pub tech_travel_hours: Decimal,
    /// Trainee travel hours, billed at the laborer rate.
    pub trainee_travel_hours: Decimal,
    /// Equipment man-nights, billed at a flat nightly rate.
    pub equipment_man_nights: Decimal,
    /// Per diem payments.
    pub per_diems: Decimal,
    /// Hourly rate for outside (subcontracted) labor.
    pub outside_laborer_rate: Decimal,
    /// Hours of outside labor.
    pub outside_laborer_hours: Decimal,
    /// Overtime premium. Recorded on the estimate but not added to the total.
    pub overtime_premium: Decimal,
    /// Slurry disposal charge.
    pub slurry_disposal: Decimal,
    /// Avetta contractor-compliance fee.
    pub avetta_fee: Decimal,
    /// ISNetworld contractor-compliance fee.
    pub isn_fee: Decimal,
    /// Materials charge.
    pub materials: Decimal,
    /// Equipment rental charge.
    pub equipment_rentals: Decimal,
    /// Trucking charge.
    pub trucking: Decimal,
    /// Dump fees.
    pub dump_fees: Decimal,
    /// Manual correction line. May be negative.
    pub adjustments: Decimal,
}

impl Default for AdditionalCosts {
    fn default() -> Self {
        Self {
            mileage_distance: Decimal::ZERO,
            mileage_trips: Decimal::ONE,
            tech_travel_hours: Decimal::ZERO,
            trainee_travel_hours: Decimal::ZERO,
            equipment_man_nights: Decimal::ZERO,
            per_diems: Decimal::ZERO,
            outside_laborer_rate: Decimal::ZERO,
            outside_laborer_hours: Decimal::ZERO,
            overtime_premium: Decimal::ZERO,
            slurry_disposal: Decimal::ZERO,
            avetta_fee: Decimal::ZERO,
            isn_fee: Decimal::ZERO,
            materials: Decimal::ZERO,
            equipment_rentals: Decimal::ZERO,
            trucking: Decimal::ZERO,
            dump_fees: Decimal::ZERO,
            adjustments: Decimal::ZERO,
        }
    }
}

impl AdditionalCosts {
    /// The manually entered amounts that are added verbatim to the total.
    ///
    /// `overtime_premium` is deliberately absent.
    pub fn manual_entries(&self) -> [(&'static str, Decimal); 9] {
        [
            ("per_diems", self.per_diems),
            ("slurry_disposal", self.slurry_disposal),
            ("avetta_fee", self.avetta_fee),
            ("isn_fee", self.isn_fee),
            ("materials", self.materials),
            ("equipment_rentals", self.equipment_rentals),
            ("trucking", self.trucking),
            ("dump_fees", self.dump_fees),
            ("adjustments", self.adjustments),
        ]
    }
}
