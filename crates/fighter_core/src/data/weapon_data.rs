//! Weapon data structures.

use serde::{Deserialize, Serialize};

/// Weapon category used to group the armoury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponCategory {
    /// Melee weapons.
    CloseCombat,
    /// Pistols and grenades.
    Pistol,
    /// Light and medium ranged weapons.
    Ranged,
    /// Special weapons.
    Special,
    /// Heavy weapons.
    Heavy,
}

impl WeaponCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::CloseCombat,
        Self::Pistol,
        Self::Ranged,
        Self::Special,
        Self::Heavy,
    ];

    /// Get the display label for this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CloseCombat => "Close Combat",
            Self::Pistol => "Pistols / Grenades",
            Self::Ranged => "Light/Medium Ranged",
            Self::Special => "Special",
            Self::Heavy => "Heavy",
        }
    }

    /// Get the short key for this category.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CloseCombat => "cc",
            Self::Pistol => "pistol",
            Self::Ranged => "ranged",
            Self::Special => "special",
            Self::Heavy => "heavy",
        }
    }
}

/// A named combat variant of a weapon (e.g. "Std" / "Supercharged").
///
/// Purely descriptive: profiles never change what a weapon costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Profile label.
    pub label: String,

    /// Attack dice, either a number or "User".
    pub attacks: String,

    /// To-hit value or modifier, e.g. "User -2" or "3+".
    pub hit: String,

    /// Normal/critical damage pair, e.g. "4/5".
    pub damage: String,

    /// Special rule tags.
    #[serde(default)]
    pub special: Vec<String>,
}

impl WeaponProfile {
    /// Special rules joined for display, or a dash when there are none.
    #[must_use]
    pub fn special_text(&self) -> String {
        if self.special.is_empty() {
            "—".to_string()
        } else {
            self.special.join(", ")
        }
    }
}

/// Data-driven weapon definition.
///
/// # Example RON
///
/// ```ron
/// WeaponData(
///     id: "p:plasma-pistol",
///     category: Pistol,
///     name: "Plasma Pistol",
///     cost: 7,
///     profiles: [
///         WeaponProfile(label: "Std", attacks: "4", hit: "User", damage: "5/6", special: []),
///         WeaponProfile(label: "Supercharged", attacks: "4", hit: "User", damage: "6/6", special: ["Risky"]),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponData {
    /// Unique string identifier.
    pub id: String,

    /// Armoury category.
    pub category: WeaponCategory,

    /// Display name.
    pub name: String,

    /// Flat point cost, charged once regardless of profile.
    pub cost: i32,

    /// Combat profiles; must not be empty.
    pub profiles: Vec<WeaponProfile>,
}

impl WeaponData {
    /// Clamp a requested profile index into the valid range.
    #[must_use]
    pub fn clamp_profile(&self, index: usize) -> usize {
        index.min(self.profiles.len().saturating_sub(1))
    }

    /// Get a profile by index, falling back to the last valid one.
    #[must_use]
    pub fn profile(&self, index: usize) -> Option<&WeaponProfile> {
        self.profiles.get(self.clamp_profile(index))
    }

    /// Check whether the weapon offers a choice of profiles.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.profiles.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(label: &str) -> WeaponProfile {
        WeaponProfile {
            label: label.to_string(),
            attacks: "4".to_string(),
            hit: "User".to_string(),
            damage: "5/6".to_string(),
            special: vec![],
        }
    }

    fn create_test_weapon() -> WeaponData {
        WeaponData {
            id: "s:plasma-gun".to_string(),
            category: WeaponCategory::Special,
            name: "Plasma Gun".to_string(),
            cost: 10,
            profiles: vec![profile("Std"), profile("Supercharged")],
        }
    }

    #[test]
    fn test_clamp_profile() {
        let weapon = create_test_weapon();
        assert_eq!(weapon.clamp_profile(0), 0);
        assert_eq!(weapon.clamp_profile(1), 1);
        assert_eq!(weapon.clamp_profile(7), 1);
    }

    #[test]
    fn test_profile_lookup() {
        let weapon = create_test_weapon();
        assert_eq!(weapon.profile(5).map(|p| p.label.as_str()), Some("Supercharged"));
        assert!(weapon.has_variants());
    }

    #[test]
    fn test_special_text() {
        let mut p = profile("Profile");
        assert_eq!(p.special_text(), "—");
        p.special = vec!["Rng 8\"".to_string(), "Piercing (-3)".to_string()];
        assert_eq!(p.special_text(), "Rng 8\", Piercing (-3)");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(WeaponCategory::ALL.len(), 5);
        assert_eq!(WeaponCategory::Pistol.label(), "Pistols / Grenades");
        assert_eq!(WeaponCategory::CloseCombat.key(), "cc");
    }
}
