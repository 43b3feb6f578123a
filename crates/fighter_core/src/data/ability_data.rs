//! Fighter and leader ability data structures.

use serde::{Deserialize, Serialize};

/// Pricing rule for a fighter ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityCost {
    /// Fixed number of points.
    Flat(i32),
    /// Whole percent of the current HP stat, rounded up.
    PercentHp(u32),
    /// Exactly the current HP stat.
    EqualHp,
}

impl AbilityCost {
    /// Check if the cost follows the HP stat.
    #[must_use]
    pub const fn depends_on_hp(&self) -> bool {
        !matches!(self, Self::Flat(_))
    }
}

/// Data-driven fighter ability definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    /// Unique string identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Pricing rule.
    pub cost: AbilityCost,

    /// Rules text lines.
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Leader ability definition. Leader abilities carry no point cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderAbilityData {
    /// Unique string identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Rules text lines.
    #[serde(default)]
    pub rules: Vec<String>,
}
