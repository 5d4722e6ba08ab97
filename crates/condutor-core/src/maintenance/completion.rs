//! Recording completed services
//!
//! Marking an item as done writes the current odometer into the vehicle's
//! history. Alerts are not recomputed here; callers run the engine again.

use super::catalog::MaintenanceCatalog;
use super::error::MaintenanceError;
use crate::store::VehicleStore;

/// Rules applied before a service is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPolicy {
    /// Accept a km lower than the one already recorded for the part
    pub allow_regression: bool,
    /// Reject part names the catalog does not track
    pub require_known_part: bool,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            allow_regression: false,
            require_known_part: true,
        }
    }
}

/// Record that `part_name` was serviced at `current_km`.
///
/// The odometer value is trusted as given. The write only lands if the
/// part's history entry is unchanged since it was read; otherwise the store
/// reports a conflict.
pub fn complete_maintenance<S: VehicleStore + ?Sized>(
    store: &mut S,
    catalog: &MaintenanceCatalog,
    policy: &CompletionPolicy,
    vehicle_id: &str,
    part_name: &str,
    current_km: u64,
) -> Result<(), MaintenanceError> {
    let vehicle = store
        .get_vehicle(vehicle_id)?
        .ok_or_else(|| MaintenanceError::VehicleNotFound(vehicle_id.to_string()))?;

    if policy.require_known_part && !catalog.contains(part_name) {
        tracing::warn!(vehicle_id, part_name, "rejected completion of unknown part");
        return Err(MaintenanceError::UnknownPart(part_name.to_string()));
    }

    let previous = vehicle
        .maintenance_history
        .as_ref()
        .and_then(|history| history.get(part_name));

    if let Some(recorded_km) = previous {
        if current_km < recorded_km && !policy.allow_regression {
            tracing::warn!(
                vehicle_id,
                part_name,
                recorded_km,
                current_km,
                "rejected completion below recorded km"
            );
            return Err(MaintenanceError::OdometerRegression {
                part: part_name.to_string(),
                recorded_km,
                requested_km: current_km,
            });
        }
    }

    store.compare_and_set_history(vehicle_id, part_name, previous, current_km)?;

    tracing::info!(vehicle_id, part_name, current_km, "recorded maintenance");
    Ok(())
}
