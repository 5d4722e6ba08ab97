//! Local Storage
//!
//! Persistence for users, vehicles and expenses. Data is kept the way the
//! browser build keeps it: one flat JSON blob per record type.
//!
//! ## Layout
//!
//! With a [`FileBackend`] a storage directory looks like:
//! ```text
//! CentralDoCondutor/
//! ├── cdc_users.json          # Registered users
//! ├── cdc_current_user.json   # Logged-in user or null
//! ├── cdc_vehicles.json       # Vehicles, with their maintenance history
//! └── cdc_expenses.json       # Expenses
//! ```
//!
//! The maintenance code only needs [`VehicleStore`]; everything else is on
//! [`LocalStore`].

mod backend;
mod error;
mod local;
mod shared;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::{AccountError, StoreError};
pub use local::{LocalStore, CURRENT_USER_KEY, EXPENSES_KEY, USERS_KEY, VEHICLES_KEY};
pub use shared::SharedStore;

use crate::models::Vehicle;

/// Vehicle access needed to compute alerts and record services
pub trait VehicleStore {
    /// Load a vehicle by id
    fn get_vehicle(&self, vehicle_id: &str) -> Result<Option<Vehicle>, StoreError>;

    /// Set the last-service km of one part, creating the history if absent.
    ///
    /// Fails with [`StoreError::VehicleNotFound`] when the id is unknown.
    fn save_vehicle_history(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        km: u64,
    ) -> Result<(), StoreError>;

    /// Like [`save_vehicle_history`](Self::save_vehicle_history), but only if
    /// the stored value for the part still equals `expected` (`None` meaning
    /// never serviced). Otherwise fails with [`StoreError::Conflict`].
    fn compare_and_set_history(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        expected: Option<u64>,
        km: u64,
    ) -> Result<(), StoreError>;
}
