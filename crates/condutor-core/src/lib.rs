//! # Central do Condutor Core Library
//!
//! Core functionality for the Central do Condutor vehicle tracker.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Maintenance alerts computed from odometer intervals
//! - Recording completed services against a vehicle's history
//! - Local key-value storage of users, vehicles and expenses as JSON blobs
//! - Expense filtering and totals
//! - Fuel consumption math
//! - Static driver guides and checklists
//!
//! ## Example
//!
//! ```rust,ignore
//! use condutor_core::maintenance::{AlertEngine, MaintenanceTracker};
//! use condutor_core::store::{FileBackend, LocalStore};
//!
//! let store = LocalStore::new(FileBackend::open(None)?);
//! let mut tracker = MaintenanceTracker::new(AlertEngine::default(), store);
//!
//! for alert in tracker.alerts_for_vehicle("abc123")? {
//!     println!("{}: {}", alert.part_name, alert.status.label());
//! }
//!
//! tracker.complete_at_current_km("abc123", "Óleo do Motor")?;
//! ```

pub mod config;
pub mod consumption;
pub mod expenses;
pub mod guides;
pub mod maintenance;
pub mod models;
pub mod store;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::expenses::ExpensePeriod;
    pub use crate::maintenance::{
        AlertEngine, AlertStatus, CompletionPolicy, MaintenanceAlert, MaintenanceCatalog,
        MaintenanceError, MaintenanceHistory, MaintenanceItemDefinition, MaintenanceTracker,
    };
    pub use crate::models::{Expense, ExpenseCategory, User, Vehicle, VehicleType};
    pub use crate::store::{
        FileBackend, KeyValueBackend, LocalStore, MemoryBackend, SharedStore, StoreError,
        VehicleStore,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
