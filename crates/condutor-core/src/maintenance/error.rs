//! Error types for maintenance tracking

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while computing alerts or recording a service
#[derive(Error, Debug)]
pub enum MaintenanceError {
    #[error("vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("invalid history value for '{part}': {value}")]
    InvalidHistoryValue { part: String, value: String },

    #[error("unknown maintenance item: '{0}'")]
    UnknownPart(String),

    #[error("'{part}' was last serviced at {recorded_km} km, cannot record {requested_km} km")]
    OdometerRegression {
        part: String,
        recorded_km: u64,
        requested_km: u64,
    },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for MaintenanceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::VehicleNotFound(id) => MaintenanceError::VehicleNotFound(id),
            StoreError::InvalidHistory { source, .. } => source.into(),
            other => MaintenanceError::Store(other),
        }
    }
}

/// A history entry that is not a whole, non-negative km reading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid history value for '{part}': {value}")]
pub struct InvalidHistoryValue {
    /// Part the entry belongs to, empty when the history itself is not an object
    pub part: String,
    /// The offending JSON value
    pub value: String,
}

impl From<InvalidHistoryValue> for MaintenanceError {
    fn from(err: InvalidHistoryValue) -> Self {
        MaintenanceError::InvalidHistoryValue {
            part: err.part,
            value: err.value,
        }
    }
}

/// Errors that can occur while building a maintenance catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog has no maintenance items")]
    EmptyCatalog,

    #[error("maintenance item '{0}' has a zero km interval")]
    ZeroInterval(String),

    #[error("maintenance item '{0}' is listed more than once")]
    DuplicatePart(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
