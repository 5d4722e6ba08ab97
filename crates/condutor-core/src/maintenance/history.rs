//! Per-vehicle service history
//!
//! Maps a maintenance item name to the odometer reading of its last service.
//! A part with no entry has never been serviced and counts as done at 0 km.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::InvalidHistoryValue;

/// Odometer reading of the last service, keyed by item name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaintenanceHistory {
    entries: BTreeMap<String, u64>,
}

impl MaintenanceHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded km for a part, if it was ever serviced
    pub fn get(&self, part_name: &str) -> Option<u64> {
        self.entries.get(part_name).copied()
    }

    /// Km of the last service, 0 when never serviced
    pub fn last_done_km(&self, part_name: &str) -> u64 {
        self.get(part_name).unwrap_or(0)
    }

    /// Record a service, returning the previous reading
    pub fn record(&mut self, part_name: impl Into<String>, km: u64) -> Option<u64> {
        self.entries.insert(part_name.into(), km)
    }

    /// Iterate over (part name, km) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, km)| (name.as_str(), *km))
    }

    /// Number of parts with a recorded service
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a stored history object.
    ///
    /// Every value must be a non-negative whole number. Integral floats such
    /// as `12000.0` are accepted; anything else rejects the whole history.
    pub fn from_json_value(value: &Value) -> Result<Self, InvalidHistoryValue> {
        let object = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(object) => object,
            other => {
                return Err(InvalidHistoryValue {
                    part: String::new(),
                    value: other.to_string(),
                })
            }
        };

        let mut history = Self::new();
        for (part, raw) in object {
            let km = parse_km(raw).ok_or_else(|| InvalidHistoryValue {
                part: part.clone(),
                value: raw.to_string(),
            })?;
            history.record(part.clone(), km);
        }
        Ok(history)
    }
}

fn parse_km(raw: &Value) -> Option<u64> {
    if let Some(km) = raw.as_u64() {
        return Some(km);
    }
    let km = raw.as_f64()?;
    (km.is_finite() && km >= 0.0 && km.fract() == 0.0 && km <= u64::MAX as f64).then(|| km as u64)
}

impl<'de> Deserialize<'de> for MaintenanceHistory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(serde::de::Error::custom)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for MaintenanceHistory {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_part_defaults_to_zero() {
        let history = MaintenanceHistory::new();
        assert_eq!(history.get("Filtro de Ar"), None);
        assert_eq!(history.last_done_km("Filtro de Ar"), 0);
    }

    #[test]
    fn test_record_overwrites() {
        let mut history = MaintenanceHistory::new();
        assert_eq!(history.record("Filtro de Ar", 15_000), None);
        assert_eq!(history.record("Filtro de Ar", 9_000), Some(15_000));
        assert_eq!(history.last_done_km("Filtro de Ar"), 9_000);
    }

    #[test]
    fn test_parse_accepts_integral_numbers() {
        let stored = json!({"Velas de Ignição": 5000, "Filtro de Ar": 12000.0});
        let history = MaintenanceHistory::from_json_value(&stored).unwrap();
        assert_eq!(history.get("Velas de Ignição"), Some(5000));
        assert_eq!(history.get("Filtro de Ar"), Some(12000));
    }

    #[test]
    fn test_parse_null_is_empty() {
        let history = MaintenanceHistory::from_json_value(&Value::Null).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        for bad in [json!("5000"), json!(-10), json!(10.5), json!(null), json!(true)] {
            let err = MaintenanceHistory::from_json_value(&json!({ "Correia Dentada": bad }))
                .unwrap_err();
            assert_eq!(err.part, "Correia Dentada");
            assert_eq!(err.value, bad.to_string());
        }
    }

    #[test]
    fn test_serde_is_a_plain_object() {
        let history: MaintenanceHistory = [("Óleo do Motor", 12_000u64)].into_iter().collect();
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json, json!({"Óleo do Motor": 12000}));

        let back: MaintenanceHistory = serde_json::from_value(json).unwrap();
        assert_eq!(back, history);
    }
}
