//! Data structures for the reference catalog.
//!
//! This module contains pure data structures that define stats, powers,
//! weapons, equipment and abilities. All structs are designed to be
//! deserialized from RON files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `fighter_tools`.

mod ability_data;
mod catalog_data;
mod equipment_data;
mod power_data;
mod stat_data;
mod weapon_data;

pub use ability_data::{AbilityCost, AbilityData, LeaderAbilityData};
pub use catalog_data::{CatalogData, PricingRules, PsychicTier};
pub use equipment_data::{EquipmentCost, EquipmentData};
pub use power_data::PowerData;
pub use stat_data::{StatData, StatFormat};
pub use weapon_data::{WeaponCategory, WeaponData, WeaponProfile};
