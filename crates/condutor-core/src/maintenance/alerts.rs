//! Maintenance alert engine
//!
//! Derives the status of every catalog item from the vehicle's odometer and
//! its service history. Alerts are never stored; they are recomputed on
//! demand and always come back in catalog order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::{MaintenanceCatalog, MaintenanceItemDefinition};
use super::history::MaintenanceHistory;

/// Distance to the next service below which an item is reported as due soon
pub const DEFAULT_WARNING_THRESHOLD_KM: u64 = 1500;

/// Service status of a single item, ordered by urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Next service is comfortably ahead
    Ok,
    /// Next service is within the warning threshold
    Warning,
    /// Service is due or overdue
    Critical,
}

impl AlertStatus {
    /// Short label shown next to the item on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Ok => "OK",
            AlertStatus::Warning => "EM BREVE",
            AlertStatus::Critical => "ATRASADO",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertStatus::Ok => "ok",
            AlertStatus::Warning => "warning",
            AlertStatus::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Computed status of one catalog item for one vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlert {
    /// Catalog item id
    pub id: String,
    /// Vehicle the alert was computed for
    pub vehicle_id: String,
    /// Catalog item name
    pub part_name: String,
    /// Service interval in km
    pub interval_km: u64,
    /// Odometer reading of the last service, 0 if never serviced
    pub last_done_km: u64,
    /// Derived status
    pub status: AlertStatus,
}

impl MaintenanceAlert {
    /// Odometer reading at which the next service is due
    pub fn next_due_km(&self) -> u64 {
        self.last_done_km.saturating_add(self.interval_km)
    }

    /// Km left until the next service, negative when overdue
    pub fn remaining_km(&self, current_km: u64) -> i64 {
        signed_distance(self.next_due_km(), current_km)
    }
}

fn signed_distance(next_due_km: u64, current_km: u64) -> i64 {
    let diff = i128::from(next_due_km) - i128::from(current_km);
    diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Classify the distance left before a service.
///
/// First match wins: `remaining <= 0` is critical, anything short of the
/// threshold is a warning, the rest is ok.
pub fn classify(remaining_km: i64, warning_threshold_km: u64) -> AlertStatus {
    if remaining_km <= 0 {
        AlertStatus::Critical
    } else if (remaining_km as u64) < warning_threshold_km {
        AlertStatus::Warning
    } else {
        AlertStatus::Ok
    }
}

/// Rule-based alert engine over a fixed catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEngine {
    catalog: MaintenanceCatalog,
    warning_threshold_km: u64,
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new(MaintenanceCatalog::default())
    }
}

impl AlertEngine {
    /// Create an engine with the default warning threshold
    pub fn new(catalog: MaintenanceCatalog) -> Self {
        Self {
            catalog,
            warning_threshold_km: DEFAULT_WARNING_THRESHOLD_KM,
        }
    }

    /// Override the warning threshold
    pub fn with_warning_threshold(mut self, km: u64) -> Self {
        self.warning_threshold_km = km;
        self
    }

    /// The catalog this engine evaluates
    pub fn catalog(&self) -> &MaintenanceCatalog {
        &self.catalog
    }

    /// Km before the due point at which items turn to warning
    pub fn warning_threshold_km(&self) -> u64 {
        self.warning_threshold_km
    }

    /// Compute one alert per catalog item, in catalog order.
    ///
    /// A missing history is the same as an empty one.
    pub fn compute_alerts(
        &self,
        vehicle_id: &str,
        current_km: u64,
        history: Option<&MaintenanceHistory>,
    ) -> Vec<MaintenanceAlert> {
        let alerts: Vec<MaintenanceAlert> = self
            .catalog
            .items()
            .iter()
            .map(|item| self.evaluate(item, vehicle_id, current_km, history))
            .collect();

        tracing::debug!(
            vehicle_id,
            current_km,
            critical = alerts.iter().filter(|a| a.status == AlertStatus::Critical).count(),
            warning = alerts.iter().filter(|a| a.status == AlertStatus::Warning).count(),
            "computed maintenance alerts"
        );

        alerts
    }

    fn evaluate(
        &self,
        item: &MaintenanceItemDefinition,
        vehicle_id: &str,
        current_km: u64,
        history: Option<&MaintenanceHistory>,
    ) -> MaintenanceAlert {
        let last_done_km = history.map_or(0, |h| h.last_done_km(&item.name));
        let next_due_km = last_done_km.saturating_add(item.interval_km);
        let remaining = signed_distance(next_due_km, current_km);

        MaintenanceAlert {
            id: item.id.clone(),
            vehicle_id: vehicle_id.to_string(),
            part_name: item.name.clone(),
            interval_km: item.interval_km,
            last_done_km,
            status: classify(remaining, self.warning_threshold_km),
        }
    }
}
