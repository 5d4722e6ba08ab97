//! Maintenance tracker
//!
//! Ties the alert engine to a vehicle store: load a vehicle, compute its
//! alerts, record services.

use super::alerts::{AlertEngine, MaintenanceAlert};
use super::completion::{complete_maintenance, CompletionPolicy};
use super::error::MaintenanceError;
use crate::models::Vehicle;
use crate::store::VehicleStore;

/// Alert engine bound to an injected store
#[derive(Debug)]
pub struct MaintenanceTracker<S> {
    engine: AlertEngine,
    policy: CompletionPolicy,
    store: S,
}

impl<S: VehicleStore> MaintenanceTracker<S> {
    /// Create a tracker with the default completion policy
    pub fn new(engine: AlertEngine, store: S) -> Self {
        Self {
            engine,
            policy: CompletionPolicy::default(),
            store,
        }
    }

    /// Replace the completion policy
    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The alert engine
    pub fn engine(&self) -> &AlertEngine {
        &self.engine
    }

    /// The completion policy
    pub fn policy(&self) -> &CompletionPolicy {
        &self.policy
    }

    /// The store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The store, mutably
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back
    pub fn into_store(self) -> S {
        self.store
    }

    fn vehicle(&self, vehicle_id: &str) -> Result<Vehicle, MaintenanceError> {
        self.store
            .get_vehicle(vehicle_id)?
            .ok_or_else(|| MaintenanceError::VehicleNotFound(vehicle_id.to_string()))
    }

    /// Alerts for a stored vehicle at its current odometer reading
    pub fn alerts_for_vehicle(
        &self,
        vehicle_id: &str,
    ) -> Result<Vec<MaintenanceAlert>, MaintenanceError> {
        let vehicle = self.vehicle(vehicle_id)?;
        Ok(self.engine.compute_alerts(
            &vehicle.id,
            vehicle.current_km,
            vehicle.maintenance_history.as_ref(),
        ))
    }

    /// Record a service at the given odometer reading
    pub fn complete_maintenance(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        current_km: u64,
    ) -> Result<(), MaintenanceError> {
        complete_maintenance(
            &mut self.store,
            self.engine.catalog(),
            &self.policy,
            vehicle_id,
            part_name,
            current_km,
        )
    }

    /// Record a service at the vehicle's stored odometer reading
    pub fn complete_at_current_km(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
    ) -> Result<(), MaintenanceError> {
        let current_km = self.vehicle(vehicle_id)?.current_km;
        self.complete_maintenance(vehicle_id, part_name, current_km)
    }
}
