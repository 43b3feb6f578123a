//! Error types for fighter building.

use serde::Serialize;
use thiserror::Error;

/// Result type alias using [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;

/// Catalog collection an identifier belongs to.
///
/// Used to give rejected requests a precise reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    /// A tunable statistic.
    Stat,
    /// A psychic power.
    Power,
    /// A weapon.
    Weapon,
    /// An equipment item.
    Equipment,
    /// A fighter ability.
    Ability,
    /// A leader ability.
    LeaderAbility,
}

impl ItemKind {
    /// Lowercase label used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Stat => "stat",
            Self::Power => "psychic power",
            Self::Weapon => "weapon",
            Self::Equipment => "equipment",
            Self::Ability => "fighter ability",
            Self::LeaderAbility => "leader ability",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level error type for fighter building.
///
/// None of these are fatal: every variant describes a request that was
/// rejected while the build under edit stayed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The identifier is not present in the reference catalog.
    #[error("Unknown {kind} '{id}'")]
    UnknownId {
        /// Collection that was searched.
        kind: ItemKind,
        /// The identifier that was not found.
        id: String,
    },

    /// A capped selection is already full.
    #[error("Cannot select another {kind}: limit of {limit} reached")]
    SelectionLimitReached {
        /// Collection whose limit was hit.
        kind: ItemKind,
        /// The active limit.
        limit: usize,
    },

    /// Powers cannot be chosen without a psychic mode.
    #[error("Psychic powers require Psyker or Master Psyker")]
    PsychicModeInactive,

    /// The catalog failed its consistency checks.
    #[error("Invalid catalog: {0:?}")]
    InvalidCatalog(Vec<String>),
}

impl BuildError {
    /// Shorthand for an [`BuildError::UnknownId`].
    #[must_use]
    pub fn unknown(kind: ItemKind, id: impl Into<String>) -> Self {
        Self::UnknownId {
            kind,
            id: id.into(),
        }
    }
}
