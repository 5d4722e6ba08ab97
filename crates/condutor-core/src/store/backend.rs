//! Key-value backends
//!
//! A backend holds one string blob per key, the same contract as browser
//! local storage. `MemoryBackend` keeps them in a map, `FileBackend` keeps
//! one `<key>.json` file per key inside a directory.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::StoreError;

/// Flat string storage addressed by key
pub trait KeyValueBackend {
    /// Read the blob stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Drop the blob stored under `key`, if any
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory of JSON files, one per key
#[derive(Debug, Clone)]
pub struct FileBackend {
    /// Storage directory
    pub path: PathBuf,
}

impl FileBackend {
    /// Get the default storage directory (in app data)
    pub fn default_path() -> io::Result<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find app data directory")
            })?;
        Ok(base.join("CentralDoCondutor"))
    }

    /// Open or create the storage directory
    pub fn open(path: Option<&Path>) -> io::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        fs::create_dir_all(&path)?;

        Ok(Self { path })
    }

    fn file_for(&self, key: &str) -> PathBuf {
        // Keys become file names
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.path.join(format!("{}.json", safe))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let file = self.file_for(key);
        match fs::read_to_string(&file) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let file = self.file_for(key);
        // Readers see either the old blob or the new one
        let tmp = file.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &file)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.file_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_backend() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("cdc_users").unwrap(), None);

        backend.set("cdc_users", "[]".to_string()).unwrap();
        assert_eq!(backend.get("cdc_users").unwrap().as_deref(), Some("[]"));

        backend.remove("cdc_users").unwrap();
        assert_eq!(backend.get("cdc_users").unwrap(), None);
    }

    #[test]
    fn test_file_backend() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("storage");

        let mut backend = FileBackend::open(Some(&root)).unwrap();
        assert!(root.is_dir());
        assert_eq!(backend.get("cdc_vehicles").unwrap(), None);

        backend.set("cdc_vehicles", "[1,2]".to_string()).unwrap();
        assert!(root.join("cdc_vehicles.json").exists());
        assert!(!root.join("cdc_vehicles.json.tmp").exists());

        // A second handle on the same directory sees the write
        let reopened = FileBackend::open(Some(&root)).unwrap();
        assert_eq!(reopened.get("cdc_vehicles").unwrap().as_deref(), Some("[1,2]"));

        backend.remove("cdc_vehicles").unwrap();
        backend.remove("cdc_vehicles").unwrap();
        assert_eq!(reopened.get("cdc_vehicles").unwrap(), None);
    }

    #[test]
    fn test_file_backend_sanitizes_keys() {
        let dir = TempDir::new().unwrap();
        let mut backend = FileBackend::open(Some(dir.path())).unwrap();
        backend.set("../escape", "x".to_string()).unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }
}
