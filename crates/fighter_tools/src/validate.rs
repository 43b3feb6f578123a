//! Data validation utilities.

use std::path::{Path, PathBuf};

use fighter_core::catalog::Catalog;

use crate::loader::{load_catalog_from_file, DataLoadError, DataLoadResult};

/// Item counts of a catalog that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCounts {
    /// File the catalog was read from.
    pub path: PathBuf,
    /// Number of stats.
    pub stats: usize,
    /// Number of psychic powers.
    pub powers: usize,
    /// Number of weapons.
    pub weapons: usize,
    /// Number of equipment items.
    pub equipment: usize,
    /// Number of fighter abilities.
    pub abilities: usize,
    /// Number of leader abilities.
    pub leader_abilities: usize,
}

impl CatalogCounts {
    fn of(path: &Path, catalog: &Catalog) -> Self {
        Self {
            path: path.to_path_buf(),
            stats: catalog.stats().count(),
            powers: catalog.powers().count(),
            weapons: catalog.weapons().count(),
            equipment: catalog.all_equipment().count(),
            abilities: catalog.abilities().count(),
            leader_abilities: catalog.leader_abilities().count(),
        }
    }
}

/// Validate a single catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn validate_catalog_file(path: &Path) -> DataLoadResult<CatalogCounts> {
    let catalog = load_catalog_from_file(path)?;
    Ok(CatalogCounts::of(path, &catalog))
}

/// Validate a catalog file, or every `.ron` file in a directory.
///
/// Files are checked in name order and checking stops at the first
/// failure.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or any data file
/// fails validation.
pub fn validate_data_path(path: &Path) -> DataLoadResult<Vec<CatalogCounts>> {
    if !path.is_dir() {
        return validate_catalog_file(path).map(|counts| vec![counts]);
    }

    let entries = std::fs::read_dir(path).map_err(|e| DataLoadError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DataLoadError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        let file = entry.path();
        if file.extension().is_some_and(|ext| ext == "ron") {
            files.push(file);
        }
    }
    files.sort();

    if files.is_empty() {
        tracing::warn!("No catalog files found in {}", path.display());
    }

    files.iter().map(|file| validate_catalog_file(file)).collect()
}
