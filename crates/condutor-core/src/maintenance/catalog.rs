//! Maintenance catalog
//!
//! The list of parts tracked for every vehicle and how often each one must be
//! serviced. Catalog order is the order alerts are reported in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::CatalogError;

/// Engine oil, the first item of the default catalog
pub const ENGINE_OIL: &str = "Óleo do Motor";
/// Air filter
pub const AIR_FILTER: &str = "Filtro de Ar";
/// Spark plugs
pub const SPARK_PLUGS: &str = "Velas de Ignição";
/// Timing belt
pub const TIMING_BELT: &str = "Correia Dentada";

/// A trackable part or service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceItemDefinition {
    /// Stable identifier, copied onto every alert for this item
    pub id: String,

    /// Display name, also the key into a vehicle's maintenance history
    pub name: String,

    /// Distance between services in km
    pub interval_km: u64,
}

impl MaintenanceItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<String>, name: impl Into<String>, interval_km: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            interval_km,
        }
    }
}

/// Ordered, validated list of maintenance items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceCatalog {
    items: Vec<MaintenanceItemDefinition>,
}

impl MaintenanceCatalog {
    /// Build a catalog, rejecting empty lists, zero intervals and repeated names
    pub fn new(items: Vec<MaintenanceItemDefinition>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for item in &items {
            if item.interval_km == 0 {
                return Err(CatalogError::ZeroInterval(item.name.clone()));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicatePart(item.name.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of items
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let items: Vec<MaintenanceItemDefinition> = serde_json::from_str(content)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Items in declaration order
    pub fn items(&self) -> &[MaintenanceItemDefinition] {
        &self.items
    }

    /// Look up an item by name
    pub fn get(&self, name: &str) -> Option<&MaintenanceItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Whether the catalog tracks a part with this name
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MaintenanceCatalog {
    fn default() -> Self {
        Self {
            items: vec![
                MaintenanceItemDefinition::new("1", ENGINE_OIL, 10_000),
                MaintenanceItemDefinition::new("2", AIR_FILTER, 15_000),
                MaintenanceItemDefinition::new("3", SPARK_PLUGS, 40_000),
                MaintenanceItemDefinition::new("4", TIMING_BELT, 60_000),
            ],
        }
    }
}

impl<'de> Deserialize<'de> for MaintenanceCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<MaintenanceItemDefinition>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}
