//! Store shared between threads
//!
//! Clones of a `SharedStore` point at the same inner store. Each call holds
//! the lock for its whole read-modify-write.

use std::sync::{Arc, Mutex, MutexGuard};

use super::error::StoreError;
use super::VehicleStore;
use crate::models::Vehicle;

/// Thread-safe handle to a store
#[derive(Debug, Default)]
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> SharedStore<S> {
    /// Share a store
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the inner store for operations beyond `VehicleStore`
    pub fn lock(&self) -> Result<MutexGuard<'_, S>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl<S: VehicleStore> VehicleStore for SharedStore<S> {
    fn get_vehicle(&self, vehicle_id: &str) -> Result<Option<Vehicle>, StoreError> {
        self.lock()?.get_vehicle(vehicle_id)
    }

    fn save_vehicle_history(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        km: u64,
    ) -> Result<(), StoreError> {
        self.lock()?.save_vehicle_history(vehicle_id, part_name, km)
    }

    fn compare_and_set_history(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        expected: Option<u64>,
        km: u64,
    ) -> Result<(), StoreError> {
        self.lock()?
            .compare_and_set_history(vehicle_id, part_name, expected, km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleType;
    use crate::store::{LocalStore, MemoryBackend};
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let mut local = LocalStore::new(MemoryBackend::new());
        let vehicle = Vehicle::new("u1", VehicleType::Carro, "VW", "Gol", 2015, 0);
        let id = vehicle.id.clone();
        local.add_vehicle(vehicle).unwrap();

        let shared = SharedStore::new(local);
        let mut writer = shared.clone();
        writer.save_vehicle_history(&id, "Filtro de Ar", 15_000).unwrap();

        let seen = shared.get_vehicle(&id).unwrap().unwrap();
        assert_eq!(
            seen.maintenance_history.unwrap().get("Filtro de Ar"),
            Some(15_000)
        );
    }

    #[test]
    fn test_racing_compare_and_set_has_one_winner() {
        let mut local = LocalStore::new(MemoryBackend::new());
        let vehicle = Vehicle::new("u1", VehicleType::Carro, "VW", "Gol", 2015, 0);
        let id = vehicle.id.clone();
        local.add_vehicle(vehicle).unwrap();
        let shared = SharedStore::new(local);

        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let mut store = shared.clone();
                let id = id.clone();
                thread::spawn(move || {
                    store.compare_and_set_history(&id, "Óleo do Motor", None, 10_000 + i)
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();
        assert_eq!(wins, 1);
    }
}
