//! Stat definitions for data-driven stat pricing.

use serde::{Deserialize, Serialize};

use crate::math::saturate;

/// How a stat value is shown on a reference sheet.
///
/// Display only; never affects pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatFormat {
    /// Bare number, e.g. `3`.
    #[default]
    Plain,
    /// Distance in inches, e.g. `6"`.
    Inches,
    /// Roll target, e.g. `9+`.
    Target,
}

impl StatFormat {
    /// Render a value in this format.
    #[must_use]
    pub fn render(&self, value: i32) -> String {
        match self {
            Self::Plain => value.to_string(),
            Self::Inches => format!("{value}\""),
            Self::Target => format!("{value}+"),
        }
    }
}

/// Data-driven definition of one tunable statistic.
///
/// # Example RON
///
/// ```ron
/// StatData(
///     name: "DEF",
///     base: 9,
///     min: 5,
///     max: Some(11),
///     up_cost: 1,
///     down_cost: 1,
///     reverse: true,
///     format: Target,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatData {
    /// Stat name, unique within a catalog.
    pub name: String,

    /// Baseline value that costs nothing.
    pub base: i32,

    /// Lowest allowed value.
    pub min: i32,

    /// Highest allowed value (`None` for unbounded).
    #[serde(default)]
    pub max: Option<i32>,

    /// Points per step in the improving direction.
    pub up_cost: i32,

    /// Points refunded per step in the worsening direction.
    #[serde(default)]
    pub down_cost: i32,

    /// When set, a value below `base` is the improvement (roll targets).
    #[serde(default)]
    pub reverse: bool,

    /// Display format.
    #[serde(default)]
    pub format: StatFormat,
}

impl StatData {
    /// Clamp a requested value into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: i32) -> i32 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Check whether a value lies within bounds.
    #[must_use]
    pub fn in_bounds(&self, value: i32) -> bool {
        self.clamp(value) == value
    }

    /// Point delta for holding `value` instead of the baseline.
    ///
    /// Positive when the stat is improved, negative when it is worsened.
    /// Linear in the distance from `base`, saturating at the `i32` bounds.
    #[must_use]
    pub fn cost_at(&self, value: i32) -> i32 {
        let delta = i64::from(value) - i64::from(self.base);
        // Normalise so that a positive step is always an improvement.
        let improvement = if self.reverse { -delta } else { delta };
        let step = if improvement >= 0 {
            self.up_cost
        } else {
            self.down_cost
        };
        saturate(improvement.saturating_mul(i64::from(step)))
    }

    /// Render a value using this stat's display format.
    #[must_use]
    pub fn display(&self, value: i32) -> String {
        self.format.render(value)
    }
}
