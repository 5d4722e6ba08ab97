//! Storage errors

use thiserror::Error;

use crate::maintenance::InvalidHistoryValue;

/// Errors that can occur while reading or writing local storage
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt data under '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("vehicle {vehicle_id} has a malformed maintenance history: {source}")]
    InvalidHistory {
        vehicle_id: String,
        #[source]
        source: InvalidHistoryValue,
    },

    #[error(
        "history of '{part}' on vehicle {vehicle_id} changed concurrently: expected {expected:?}, found {actual:?}"
    )]
    Conflict {
        vehicle_id: String,
        part: String,
        expected: Option<u64>,
        actual: Option<u64>,
    },

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Errors from registering or logging in a user
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("name, email and password are required")]
    MissingFields,

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
