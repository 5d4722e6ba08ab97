//! Maintenance Alerts
//!
//! Tracks when each part of a vehicle was last serviced and reports which
//! ones are due.
//!
//! For every item in the [`MaintenanceCatalog`] the engine computes
//! `next_due = last_done + interval` and compares it with the odometer:
//!
//! ```text
//! remaining = next_due - current_km
//!
//! remaining <= 0           -> critical
//! remaining <  1500 km     -> warning
//! otherwise                -> ok
//! ```
//!
//! Status only moves forward as km accumulate. Recording a service with
//! [`complete_maintenance`] is the only way back to ok.

mod alerts;
mod catalog;
mod completion;
mod error;
mod history;
mod tracker;

pub use alerts::{
    classify, AlertEngine, AlertStatus, MaintenanceAlert, DEFAULT_WARNING_THRESHOLD_KM,
};
pub use catalog::{
    MaintenanceCatalog, MaintenanceItemDefinition, AIR_FILTER, ENGINE_OIL, SPARK_PLUGS,
    TIMING_BELT,
};
pub use completion::{complete_maintenance, CompletionPolicy};
pub use error::{CatalogError, InvalidHistoryValue, MaintenanceError};
pub use history::MaintenanceHistory;
pub use tracker::MaintenanceTracker;
