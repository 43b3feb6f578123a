//! Psychic modes and the psychic surcharge.

use serde::{Deserialize, Serialize};

use crate::data::{PricingRules, PsychicTier};
use crate::math::ceil_percent;

/// Psychic capability of a fighter. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PsychicMode {
    /// No psychic powers.
    #[default]
    None,
    /// Uses one power per activation, chooses from a small pool.
    Psyker,
    /// Uses two powers per activation, chooses from a larger pool.
    MasterPsyker,
}

impl PsychicMode {
    /// Get the display name for this mode.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Psyker => "Psyker",
            Self::MasterPsyker => "Master Psyker",
        }
    }

    /// Pricing tier for this mode, if it is psychic at all.
    #[must_use]
    pub fn tier<'r>(&self, rules: &'r PricingRules) -> Option<&'r PsychicTier> {
        match self {
            Self::None => None,
            Self::Psyker => Some(&rules.psyker),
            Self::MasterPsyker => Some(&rules.master_psyker),
        }
    }

    /// Number of powers this mode may choose.
    #[must_use]
    pub fn power_limit(&self, rules: &PricingRules) -> usize {
        self.tier(rules).map_or(0, |tier| tier.power_limit)
    }

    /// Surcharge for this mode on top of `base_and_stats`, rounded up.
    #[must_use]
    pub fn surcharge(&self, rules: &PricingRules, base_and_stats: i32) -> i32 {
        self.tier(rules)
            .map_or(0, |tier| ceil_percent(base_and_stats, tier.surcharge_percent))
    }

    /// Check if the fighter can use powers at all.
    #[must_use]
    pub const fn is_psychic(&self) -> bool {
        !matches!(self, Self::None)
    }
}
