//! Catalog loading from RON files.
//!
//! Reads a catalog definition, validates it and builds the indexed
//! [`Catalog`]. All validation happens at load time.

use std::io::Read;
use std::path::Path;

use fighter_core::catalog::Catalog;
use fighter_core::data::CatalogData;
use fighter_core::error::BuildError;
use thiserror::Error;

/// Errors that can occur during catalog loading.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON file.
    #[error("Failed to parse RON file '{path}': {source}")]
    ParseError {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Catalog data validation failed.
    #[error("Validation failed for catalog '{path}': {errors:?}")]
    ValidationError {
        /// Path to the file.
        path: String,
        /// List of validation errors.
        errors: Vec<String>,
    },
}

/// Result type for data loading operations.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Parse catalog data from RON text without validating it.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns an error if the text is not a valid catalog definition.
pub fn parse_catalog_data(contents: &str, path: &str) -> DataLoadResult<CatalogData> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        source: e,
    })
}

/// Read catalog data from a RON file without validating it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_catalog_data(path: &Path) -> DataLoadResult<CatalogData> {
    let path_str = path.display().to_string();

    let mut file = std::fs::File::open(path).map_err(|e| DataLoadError::IoError {
        path: path_str.clone(),
        source: e,
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| DataLoadError::IoError {
            path: path_str.clone(),
            source: e,
        })?;

    parse_catalog_data(&contents, &path_str)
}

/// Load and validate a catalog from a RON file.
///
/// # Arguments
///
/// * `path` - Path to the RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_catalog_from_file(path: &Path) -> DataLoadResult<Catalog> {
    let path_str = path.display().to_string();
    let data = read_catalog_data(path)?;

    let catalog = Catalog::new(data).map_err(|e| match e {
        BuildError::InvalidCatalog(errors) => DataLoadError::ValidationError {
            path: path_str.clone(),
            errors,
        },
        other => DataLoadError::ValidationError {
            path: path_str.clone(),
            errors: vec![other.to_string()],
        },
    })?;

    let data = catalog.data();
    tracing::info!(
        "Loaded catalog '{}' ({}) with {} stats, {} powers, {} weapons, {} equipment, {} abilities, {} leader abilities",
        path_str,
        if data.version.is_empty() { "unversioned" } else { data.version.as_str() },
        data.stats.len(),
        data.powers.len(),
        data.weapons.len(),
        data.equipment.len(),
        data.abilities.len(),
        data.leader_abilities.len()
    );

    Ok(catalog)
}
