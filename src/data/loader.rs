//! RON data loader
//!
//! Loads the token catalog and rarity standards from external RON files,
//! with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::catalog::Catalog;
use super::defaults::default_catalog;
use crate::balance::RarityPolicy;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";

pub const CATALOG_FILE: &str = "catalog.ron";

pub const STANDARDS_FILE: &str = "rarity_standards.ron";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read and parse one RON file
fn read_ron<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_ron<T: Serialize>(path: &Path, value: &T) -> CatalogResult<()> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    fs::write(path, text).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog file
pub fn load_catalog(path: &Path) -> CatalogResult<Catalog> {
    read_ron(path)
}

/// Load a catalog exported as JSON by the web front end
pub fn load_catalog_json(path: &Path) -> CatalogResult<Catalog> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a rarity standards file
pub fn load_policy(path: &Path) -> CatalogResult<RarityPolicy> {
    read_ron(path)
}

/// Load a file if it exists, otherwise (or on error) use the fallback
fn load_or_default<T: DeserializeOwned>(path: &Path, fallback: impl FnOnce() -> T) -> T {
    if !path.exists() {
        log::debug!("{} not found, using defaults", path.display());
        return fallback();
    }

    match read_ron(path) {
        Ok(value) => {
            log::info!("Loaded {}", path.display());
            value
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            fallback()
        }
    }
}

/// Owns the external data the engine is configured with
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    pub catalog: Catalog,
    pub policy: RarityPolicy,
}

impl DataManager {
    /// Load from [`DEFAULT_DATA_DIR`], falling back to defaults
    pub fn new() -> Self {
        Self::load_from_dir(Path::new(DEFAULT_DATA_DIR))
    }

    /// Load each file from `dir`; a missing or broken file falls back to its default
    pub fn load_from_dir(dir: &Path) -> Self {
        Self {
            catalog: load_or_default(&dir.join(CATALOG_FILE), default_catalog),
            policy: load_or_default(&dir.join(STANDARDS_FILE), RarityPolicy::default),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &RarityPolicy {
        &self.policy
    }
}

/// Export the default data to RON files for easy editing
pub fn export_default_data(dir: &Path) -> CatalogResult<()> {
    fs::create_dir_all(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_ron(&dir.join(CATALOG_FILE), &default_catalog())?;
    write_ron(&dir.join(STANDARDS_FILE), &RarityPolicy::default())?;

    log::info!("Exported default data to {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::RarityTier;

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().unwrap();
        export_default_data(dir.path()).unwrap();

        assert!(dir.path().join(CATALOG_FILE).exists());
        assert!(dir.path().join(STANDARDS_FILE).exists());

        let loaded = load_catalog(&dir.path().join(CATALOG_FILE)).unwrap();
        assert_eq!(loaded, default_catalog());

        let policy = load_policy(&dir.path().join(STANDARDS_FILE)).unwrap();
        assert_eq!(policy, RarityPolicy::default());
    }

    #[test]
    fn test_missing_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = DataManager::load_from_dir(&dir.path().join("nowhere"));
        assert_eq!(manager.catalog, default_catalog());
        assert!(manager.policy.standard(RarityTier::Artifact).is_some());
    }

    #[test]
    fn test_broken_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CATALOG_FILE), "(weapons: oops").unwrap();

        assert!(matches!(
            load_catalog(&dir.path().join(CATALOG_FILE)),
            Err(CatalogError::Parse { .. })
        ));

        let manager = DataManager::load_from_dir(dir.path());
        assert_eq!(manager.catalog, default_catalog());
    }

    #[test]
    fn test_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, serde_json::to_string(&default_catalog()).unwrap()).unwrap();
        assert_eq!(load_catalog_json(&path).unwrap(), default_catalog());

        fs::write(&path, "{\"elements\": 7}").unwrap();
        assert!(matches!(load_catalog_json(&path), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join(CATALOG_FILE)).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains(CATALOG_FILE));
    }
}
