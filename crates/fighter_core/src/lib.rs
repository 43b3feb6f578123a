//! # Fighter Core
//!
//! Deterministic point-cost engine for custom skirmish fighters.
//!
//! This crate contains **only** pricing logic:
//! - No rendering
//! - No IO
//! - No floating-point math (percentages round up with integer arithmetic)
//!
//! This separation enables:
//! - Identical totals on every host
//! - Catalogs loaded from any source
//! - Property testing of every pricing rule
//!
//! ## Crate Structure
//!
//! - [`data`] - Catalog definitions deserialized from RON
//! - [`catalog`] - Validated, indexed reference catalog
//! - [`builder`] - Editable build and its operations
//! - [`pricing`] - Cost breakdown of a build
//! - [`sheet`] - Printable loadout reference sheet
//! - [`math`] - Integer rounding helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod budget;
pub mod builder;
pub mod catalog;
pub mod data;
pub mod error;
pub mod math;
pub mod pricing;
pub mod psychic;
pub mod selection;
pub mod sheet;
pub mod stats;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::budget::PointsCap;
    pub use crate::builder::{BuildState, FighterBuilder};
    pub use crate::catalog::Catalog;
    pub use crate::data::{
        AbilityCost, AbilityData, CatalogData, EquipmentCost, EquipmentData, LeaderAbilityData,
        PowerData, PricingRules, PsychicTier, StatData, StatFormat, WeaponCategory, WeaponData,
        WeaponProfile,
    };
    pub use crate::error::{BuildError, ItemKind, Result};
    pub use crate::pricing::{CostBreakdown, LineItem};
    pub use crate::psychic::PsychicMode;
    pub use crate::selection::{SelectionSet, Toggle};
    pub use crate::sheet::LoadoutSheet;
    pub use crate::stats::{StatChange, StatLedger};
}
