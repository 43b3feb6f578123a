//! Psychic power data.

use serde::{Deserialize, Serialize};

/// A psychic power a psyker can choose.
///
/// Powers are not priced individually; psychic capability is charged as a
/// surcharge on the whole fighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerData {
    /// Power name, unique within a catalog.
    pub name: String,

    /// Range description.
    pub range: String,

    /// Psychic test threshold.
    pub test: String,

    /// Effect text.
    pub effect: String,
}
