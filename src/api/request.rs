//! Request types for the estimate API.
//!
//! This module defines the JSON request structures for the `/estimate` endpoint.
//! Every numeric field is read with [`super::lenient`], so a request never fails
//! because a form field held a blank or non-numeric value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    AdditionalCosts, CoreDrillingItem, EstimateInput, LineItem, LinearCutItem, RateProfile,
    StandaloneLaborItem, WallSawingItem,
};

use super::lenient;

/// Request body for the `/estimate` endpoint.
///
/// Rates come from `rates` when given inline, otherwise from the named
/// `rate_profile`, otherwise from the configured default profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Name of a configured rate profile.
    #[serde(default)]
    pub rate_profile: Option<String>,
    /// Inline rates, overriding any named profile.
    #[serde(default)]
    pub rates: Option<RatesRequest>,
    /// Core drilling items.
    #[serde(default)]
    pub core_drilling: Vec<CoreDrillingRequest>,
    /// Wall sawing items.
    #[serde(default)]
    pub wall_sawing: Vec<WallSawingRequest>,
    /// Hand-held chain saw items.
    #[serde(default)]
    pub hand_held_chain_saw: Vec<LinearCutRequest>,
    /// Hand saw items.
    #[serde(default)]
    pub hand_saw: Vec<LinearCutRequest>,
    /// Slab sawing items.
    #[serde(default)]
    pub slab_sawing: Vec<LinearCutRequest>,
    /// Standalone labor items.
    #[serde(default)]
    pub standalone_labor: Vec<StandaloneLaborRequest>,
    /// Additional cost factors.
    #[serde(default)]
    pub additional_costs: AdditionalCostsRequest,
}

/// Inline rates in an estimate request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesRequest {
    /// Technician hourly rate.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub technician_rate: Decimal,
    /// Laborer hourly rate.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub laborer_rate: Decimal,
    /// Per-mile rate.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub mileage_rate: Decimal,
}

/// A core drilling item in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreDrillingRequest {
    /// Item id; generated when missing or not a UUID.
    #[serde(default = "Uuid::new_v4", deserialize_with = "lenient::uuid")]
    pub id: Uuid,
    /// Free-text description.
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Number of holes.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    /// Hole depth in inches.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub depth_inches: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub complexity_pct: Decimal,
    /// Hole width, recorded for layout only.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub width: Decimal,
    /// Layout spacing along the length, recorded only.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub length_interval: Decimal,
    /// Layout spacing across the width, recorded only.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub width_interval: Decimal,
}

/// A wall sawing item in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSawingRequest {
    /// Item id; generated when missing or not a UUID.
    #[serde(default = "Uuid::new_v4", deserialize_with = "lenient::uuid")]
    pub id: Uuid,
    /// Free-text description.
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Number of cuts.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    /// Cut length in feet.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub length_feet: Decimal,
    /// Wall thickness in inches.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub depth_inches: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub complexity_pct: Decimal,
}

/// A chain saw, hand saw or slab sawing item in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearCutRequest {
    /// Item id; generated when missing or not a UUID.
    #[serde(default = "Uuid::new_v4", deserialize_with = "lenient::uuid")]
    pub id: Uuid,
    /// Free-text description.
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Number of cuts.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    /// Cut length in feet.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub length_feet: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub complexity_pct: Decimal,
}

/// A standalone labor item in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandaloneLaborRequest {
    /// Item id; generated when missing or not a UUID.
    #[serde(default = "Uuid::new_v4", deserialize_with = "lenient::uuid")]
    pub id: Uuid,
    /// Free-text description.
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Labor hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub hours: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub complexity_pct: Decimal,
}

/// Additional cost factors in an estimate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalCostsRequest {
    /// One-way distance in miles.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub mileage_distance: Decimal,
    /// Number of round trips; one when absent.
    #[serde(default = "one", deserialize_with = "lenient::decimal")]
    pub mileage_trips: Decimal,
    /// Technician travel hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub tech_travel_hours: Decimal,
    /// Trainee travel hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub trainee_travel_hours: Decimal,
    /// Equipment man-nights.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub equipment_man_nights: Decimal,
    /// Per diem amount.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub per_diems: Decimal,
    /// Hourly rate for outside laborers.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub outside_laborer_rate: Decimal,
    /// Outside laborer hours.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub outside_laborer_hours: Decimal,
    /// Overtime premium, recorded only.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub overtime_premium: Decimal,
    /// Slurry disposal.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub slurry_disposal: Decimal,
    /// Avetta compliance fee.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub avetta_fee: Decimal,
    /// ISNetworld compliance fee.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub isn_fee: Decimal,
    /// Materials.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub materials: Decimal,
    /// Equipment rentals.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub equipment_rentals: Decimal,
    /// Trucking.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub trucking: Decimal,
    /// Dump fees.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub dump_fees: Decimal,
    /// Manual adjustment; may be negative.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub adjustments: Decimal,
}

fn one() -> Decimal {
    Decimal::ONE
}

impl Default for AdditionalCostsRequest {
    fn default() -> Self {
        AdditionalCosts::default().into()
    }
}

impl EstimateRequest {
    /// Builds the engine input, pricing with `rates`.
    ///
    /// Line items are ordered by category, then by their position in each array.
    pub fn into_input(self, rates: RateProfile) -> EstimateInput {
        let line_items = self
            .core_drilling
            .into_iter()
            .map(|item| LineItem::CoreDrilling(item.into()))
            .chain(
                self.wall_sawing
                    .into_iter()
                    .map(|item| LineItem::WallSawing(item.into())),
            )
            .chain(
                self.hand_held_chain_saw
                    .into_iter()
                    .map(|item| LineItem::HandHeldChainSaw(item.into())),
            )
            .chain(
                self.hand_saw
                    .into_iter()
                    .map(|item| LineItem::HandSaw(item.into())),
            )
            .chain(
                self.slab_sawing
                    .into_iter()
                    .map(|item| LineItem::SlabSawing(item.into())),
            )
            .chain(
                self.standalone_labor
                    .into_iter()
                    .map(|item| LineItem::StandaloneLabor(item.into())),
            )
            .collect();

        EstimateInput {
            rates,
            line_items,
            additional_costs: self.additional_costs.into(),
        }
    }
}

impl From<RatesRequest> for RateProfile {
    fn from(req: RatesRequest) -> Self {
        RateProfile::new(req.technician_rate, req.laborer_rate, req.mileage_rate)
    }
}

impl From<CoreDrillingRequest> for CoreDrillingItem {
    fn from(req: CoreDrillingRequest) -> Self {
        CoreDrillingItem {
            id: req.id,
            description: req.description,
            quantity: req.quantity,
            depth_inches: req.depth_inches,
            complexity_pct: req.complexity_pct,
            width: req.width,
            length_interval: req.length_interval,
            width_interval: req.width_interval,
        }
    }
}

impl From<WallSawingRequest> for WallSawingItem {
    fn from(req: WallSawingRequest) -> Self {
        WallSawingItem {
            id: req.id,
            description: req.description,
            quantity: req.quantity,
            length_feet: req.length_feet,
            depth_inches: req.depth_inches,
            complexity_pct: req.complexity_pct,
        }
    }
}

impl From<LinearCutRequest> for LinearCutItem {
    fn from(req: LinearCutRequest) -> Self {
        LinearCutItem {
            id: req.id,
            description: req.description,
            quantity: req.quantity,
            length_feet: req.length_feet,
            complexity_pct: req.complexity_pct,
        }
    }
}

impl From<StandaloneLaborRequest> for StandaloneLaborItem {
    fn from(req: StandaloneLaborRequest) -> Self {
        StandaloneLaborItem {
            id: req.id,
            description: req.description,
            hours: req.hours,
            complexity_pct: req.complexity_pct,
        }
    }
}

impl From<AdditionalCostsRequest> for AdditionalCosts {
    fn from(req: AdditionalCostsRequest) -> Self {
        AdditionalCosts {
            mileage_distance: req.mileage_distance,
            mileage_trips: req.mileage_trips,
            tech_travel_hours: req.tech_travel_hours,
            trainee_travel_hours: req.trainee_travel_hours,
            equipment_man_nights: req.equipment_man_nights,
            per_diems: req.per_diems,
            outside_laborer_rate: req.outside_laborer_rate,
            outside_laborer_hours: req.outside_laborer_hours,
            overtime_premium: req.overtime_premium,
            slurry_disposal: req.slurry_disposal,
            avetta_fee: req.avetta_fee,
            isn_fee: req.isn_fee,
            materials: req.materials,
            equipment_rentals: req.equipment_rentals,
            trucking: req.trucking,
            dump_fees: req.dump_fees,
            adjustments: req.adjustments,
        }
    }
}

impl From<AdditionalCosts> for AdditionalCostsRequest {
    fn from(costs: AdditionalCosts) -> Self {
        AdditionalCostsRequest {
            mileage_distance: costs.mileage_distance,
            mileage_trips: costs.mileage_trips,
            tech_travel_hours: costs.tech_travel_hours,
            trainee_travel_hours: costs.trainee_travel_hours,
            equipment_man_nights: costs.equipment_man_nights,
            per_diems: costs.per_diems,
            outside_laborer_rate: costs.outside_laborer_rate,
            outside_laborer_hours: costs.outside_laborer_hours,
            overtime_premium: costs.overtime_premium,
            slurry_disposal: costs.slurry_disposal,
            avetta_fee: costs.avetta_fee,
            isn_fee: costs.isn_fee,
            materials: costs.materials,
            equipment_rentals: costs.equipment_rentals,
            trucking: costs.trucking,
            dump_fees: costs.dump_fees,
            adjustments: costs.adjustments,
        }
    }
}
