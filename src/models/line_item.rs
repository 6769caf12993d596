//! Line item models for the six service categories.
//!
//! Each work entry on an estimate is one [`LineItem`]. The enum is closed:
//! every category has exactly one variant, and cost calculation dispatches
//! on the variant rather than on the shape of the data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The six service categories an estimate groups its line items into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    /// Core drilling through slabs and walls.
    CoreDrilling,
    /// Track-mounted wall sawing.
    WallSawing,
    /// Hand-held chain saw cutting.
    HandHeldChainSaw,
    /// Hand saw cutting.
    HandSaw,
    /// Walk-behind slab sawing.
    SlabSawing,
    /// Labor billed by the hour with no cutting equipment.
    StandaloneLabor,
}

impl ServiceCategory {
    /// All categories in display order.
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::CoreDrilling,
        ServiceCategory::WallSawing,
        ServiceCategory::HandHeldChainSaw,
        ServiceCategory::HandSaw,
        ServiceCategory::SlabSawing,
        ServiceCategory::StandaloneLabor,
    ];

    /// The snake_case identifier used in JSON and audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::CoreDrilling => "core_drilling",
            ServiceCategory::WallSawing => "wall_sawing",
            ServiceCategory::HandHeldChainSaw => "hand_held_chain_saw",
            ServiceCategory::HandSaw => "hand_saw",
            ServiceCategory::SlabSawing => "slab_sawing",
            ServiceCategory::StandaloneLabor => "standalone_labor",
        }
    }

    /// A human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::CoreDrilling => "Core Drilling",
            ServiceCategory::WallSawing => "Wall Sawing",
            ServiceCategory::HandHeldChainSaw => "Hand-Held Chain Saw",
            ServiceCategory::HandSaw => "Hand Saw",
            ServiceCategory::SlabSawing => "Slab Sawing",
            ServiceCategory::StandaloneLabor => "Standalone Labor",
        }
    }
}

/// A core drilling entry: a number of holes drilled to a given depth.
///
/// `width`, `length_interval` and `width_interval` describe the hole layout
/// for display. The cost formula reads only `quantity` and `depth_inches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreDrillingItem {
    /// Identity for list management.
    pub id: Uuid,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Number of holes.
    pub quantity: Decimal,
    /// Depth of each hole in inches.
    pub depth_inches: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default)]
    pub complexity_pct: Decimal,
    /// Bit diameter.
    #[serde(default)]
    pub width: Decimal,
    /// Spacing between holes along the length.
    #[serde(default)]
    pub length_interval: Decimal,
    /// Spacing between hole rows.
    #[serde(default)]
    pub width_interval: Decimal,
}

/// A wall sawing entry: cuts of a given length and depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSawingItem {
    /// Identity for list management.
    pub id: Uuid,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Number of cuts.
    pub quantity: Decimal,
    /// Length of each cut in feet.
    pub length_feet: Decimal,
    /// Depth of each cut in inches.
    pub depth_inches: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default)]
    pub complexity_pct: Decimal,
}

/// A cut priced by linear feet alone.
///
/// Shared by the hand-held chain saw, hand saw and slab sawing categories,
/// which differ only in their labor and wear coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCutItem {
    /// Identity for list management.
    pub id: Uuid,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Number of cuts.
    pub quantity: Decimal,
    /// Length of each cut in feet.
    pub length_feet: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default)]
    pub complexity_pct: Decimal,
}

/// Labor billed directly by the hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandaloneLaborItem {
    /// Identity for list management.
    pub id: Uuid,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Hours of labor.
    pub hours: Decimal,
    /// Complexity surcharge percentage.
    #[serde(default)]
    pub complexity_pct: Decimal,
}

/// One work entry on an estimate.
///
/// # Example
///
/// ```
/// use cutting_estimator::models::{LineItem, LinearCutItem, ServiceCategory};
/// use rust_decimal_macros::dec;
/// use uuid::Uuid;
///
/// let item = LineItem::SlabSawing(LinearCutItem {
///     id: Uuid::new_v4(),
///     description: "Trench cut".to_string(),
///     quantity: dec!(2),
///     length_feet: dec!(40),
///     complexity_pct: dec!(0),
/// });
/// assert_eq!(item.category(), ServiceCategory::SlabSawing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum LineItem {
    /// Core drilling.
    CoreDrilling(CoreDrillingItem),
    /// Wall sawing.
    WallSawing(WallSawingItem),
    /// Hand-held chain saw.
    HandHeldChainSaw(LinearCutItem),
    /// Hand saw.
    HandSaw(LinearCutItem),
    /// Slab sawing.
    SlabSawing(LinearCutItem),
    /// Standalone labor.
    StandaloneLabor(StandaloneLaborItem),
}

impl LineItem {
    /// Returns the category this item is totalled under.
    pub fn category(&self) -> ServiceCategory {
        match self {
            LineItem::CoreDrilling(_) => ServiceCategory::CoreDrilling,
            LineItem::WallSawing(_) => ServiceCategory::WallSawing,
            LineItem::HandHeldChainSaw(_) => ServiceCategory::HandHeldChainSaw,
            LineItem::HandSaw(_) => ServiceCategory::HandSaw,
            LineItem::SlabSawing(_) => ServiceCategory::SlabSawing,
            LineItem::StandaloneLabor(_) => ServiceCategory::StandaloneLabor,
        }
    }

    /// Returns the item's identity.
    pub fn id(&self) -> Uuid {
        match self {
            LineItem::CoreDrilling(item) => item.id,
            LineItem::WallSawing(item) => item.id,
            LineItem::HandHeldChainSaw(item)
            | LineItem::HandSaw(item)
            | LineItem::SlabSawing(item) => item.id,
            LineItem::StandaloneLabor(item) => item.id,
        }
    }

    /// Returns the item's free-text description.
    pub fn description(&self) -> &str {
        match self {
            LineItem::CoreDrilling(item) => &item.description,
            LineItem::WallSawing(item) => &item.description,
            LineItem::HandHeldChainSaw(item)
            | LineItem::HandSaw(item)
            | LineItem::SlabSawing(item) => &item.description,
            LineItem::StandaloneLabor(item) => &item.description,
        }
    }

    /// Returns the item's complexity surcharge percentage.
    pub fn complexity_pct(&self) -> Decimal {
        match self {
            LineItem::CoreDrilling(item) => item.complexity_pct,
            LineItem::WallSawing(item) => item.complexity_pct,
            LineItem::HandHeldChainSaw(item)
            | LineItem::HandSaw(item)
            | LineItem::SlabSawing(item) => item.complexity_pct,
            LineItem::StandaloneLabor(item) => item.complexity_pct,
        }
    }

    /// Returns the dimensional inputs that feed the cost formula, by name.
    pub fn cost_inputs(&self) -> Vec<(&'static str, Decimal)> {
        match self {
            LineItem::CoreDrilling(item) => vec![
                ("quantity", item.quantity),
                ("depth_inches", item.depth_inches),
            ],
            LineItem::WallSawing(item) => vec![
                ("quantity", item.quantity),
                ("length_feet", item.length_feet),
                ("depth_inches", item.depth_inches),
            ],
            LineItem::HandHeldChainSaw(item)
            | LineItem::HandSaw(item)
            | LineItem::SlabSawing(item) => vec![
                ("quantity", item.quantity),
                ("length_feet", item.length_feet),
            ],
            LineItem::StandaloneLabor(item) => vec![("hours", item.hours)],
        }
    }
}
