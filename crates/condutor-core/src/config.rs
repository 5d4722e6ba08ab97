//! Application settings
//!
//! Stored as `settings.json` next to the data files. Every field has a
//! default, so older or partial files keep loading.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::maintenance::{
    AlertEngine, CatalogError, CompletionPolicy, MaintenanceCatalog, MaintenanceItemDefinition,
    DEFAULT_WARNING_THRESHOLD_KM,
};
use crate::store::FileBackend;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid maintenance catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// User-adjustable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Settings version for migrations
    #[serde(default = "default_version")]
    pub version: String,

    /// Km before a service is due at which items turn to warning
    #[serde(default = "default_warning_threshold_km")]
    pub warning_threshold_km: u64,

    /// Accept services recorded below the previously recorded km
    #[serde(default)]
    pub allow_history_regression: bool,

    /// Reject services for parts missing from the catalog
    #[serde(default = "default_require_known_part")]
    pub require_known_part: bool,

    /// Custom catalog; the built-in one is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<MaintenanceItemDefinition>>,

    /// Storage directory; the platform data directory when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_warning_threshold_km() -> u64 {
    DEFAULT_WARNING_THRESHOLD_KM
}

fn default_require_known_part() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            warning_threshold_km: default_warning_threshold_km(),
            allow_history_regression: false,
            require_known_part: default_require_known_part(),
            catalog: None,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> io::Result<PathBuf> {
        Ok(FileBackend::default_path()?.join("settings.json"))
    }

    /// Load settings from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        // Validate the catalog
        settings.catalog()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Save settings to a file, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Result<MaintenanceCatalog, CatalogError> {
        match &self.catalog {
            Some(items) => MaintenanceCatalog::new(items.clone()),
            None => Ok(MaintenanceCatalog::default()),
        }
    }

    /// Alert engine built from these settings
    pub fn engine(&self) -> Result<AlertEngine, CatalogError> {
        Ok(AlertEngine::new(self.catalog()?).with_warning_threshold(self.warning_threshold_km))
    }

    /// Completion rules from these settings
    pub fn completion_policy(&self) -> CompletionPolicy {
        CompletionPolicy {
            allow_regression: self.allow_history_regression,
            require_known_part: self.require_known_part,
        }
    }

    /// Open the configured storage directory
    pub fn open_backend(&self) -> io::Result<FileBackend> {
        FileBackend::open(self.data_dir.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"allow_history_regression": true}"#).unwrap();
        assert_eq!(settings.warning_threshold_km, 1500);
        assert!(settings.allow_history_regression);
        assert!(settings.require_known_part);
        assert_eq!(settings.version, "1.0");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            warning_threshold_km: 2000,
            catalog: Some(vec![MaintenanceItemDefinition::new("1", "Óleo do Motor", 5000)]),
            ..Settings::default()
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        let engine = loaded.engine().unwrap();
        assert_eq!(engine.warning_threshold_km(), 2000);
        assert_eq!(engine.catalog().len(), 1);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_or_default(dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.engine().unwrap().catalog(), &MaintenanceCatalog::default());
    }

    #[test]
    fn test_bad_catalog_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"catalog": [{"id": "1", "name": "X", "intervalKm": 0}]}"#).unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(ConfigError::Catalog(CatalogError::ZeroInterval(_)))
        ));
    }
}
