//! Equipment data structures.

use serde::{Deserialize, Serialize};

/// Pricing rule for an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCost {
    /// Fixed number of points.
    Flat(i32),
    /// Whole percent of Base+Stats, rounded up (e.g. 50 for 50%).
    Percent(u32),
}

/// Data-driven equipment definition.
///
/// # Example RON
///
/// ```ron
/// EquipmentData(
///     id: "eq:blink-pack",
///     name: "Blink Pack / Personal Teleporter",
///     only_one: true,
///     cost: Percent(50),
///     rules: ["1 AP: Reposition up to 12\"."],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentData {
    /// Unique string identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// At most one fighter per team may carry this.
    ///
    /// Advisory only: roster-level rules are not checked here.
    #[serde(default)]
    pub only_one: bool,

    /// Pricing rule.
    pub cost: EquipmentCost,

    /// Rules text lines.
    #[serde(default)]
    pub rules: Vec<String>,
}

impl EquipmentData {
    /// Check if the item is priced relative to Base+Stats.
    #[must_use]
    pub fn is_percent(&self) -> bool {
        matches!(self.cost, EquipmentCost::Percent(_))
    }
}
