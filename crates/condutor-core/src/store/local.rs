//! Local record store
//!
//! Users, vehicles and expenses kept as flat JSON arrays in a key-value
//! backend, one key per record type. Every operation reads the whole array,
//! changes it and writes it back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::backend::KeyValueBackend;
use super::error::{AccountError, StoreError};
use super::VehicleStore;
use crate::maintenance::MaintenanceHistory;
use crate::models::{Expense, User, Vehicle};

/// Storage key of the registered users array
pub const USERS_KEY: &str = "cdc_users";
/// Storage key of the logged-in user object (or `null`)
pub const CURRENT_USER_KEY: &str = "cdc_current_user";
/// Storage key of the vehicles array
pub const VEHICLES_KEY: &str = "cdc_vehicles";
/// Storage key of the expenses array
pub const EXPENSES_KEY: &str = "cdc_expenses";

/// Record store over a key-value backend
#[derive(Debug, Clone, Default)]
pub struct LocalStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> LocalStore<B> {
    /// Wrap a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwrap the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(content) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&content).map(Some).map_err(|source| {
            tracing::warn!(key, error = %source, "corrupt JSON in local storage");
            StoreError::Json {
                key: key.to_string(),
                source,
            }
        })
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, content)
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        Ok(self.read(key)?.unwrap_or_default())
    }

    // Users

    /// All registered users
    pub fn users(&self) -> Result<Vec<User>, StoreError> {
        self.read_list(USERS_KEY)
    }

    /// Append a user
    pub fn save_user(&mut self, user: User) -> Result<(), StoreError> {
        let mut users = self.users()?;
        users.push(user);
        self.write(USERS_KEY, &users)
    }

    /// Find a user by email
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users()?.into_iter().find(|u| u.email == email))
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        Ok(self.read::<Option<User>>(CURRENT_USER_KEY)?.flatten())
    }

    /// Set or clear the logged-in user
    pub fn set_current_user(&mut self, user: Option<&User>) -> Result<(), StoreError> {
        self.write(CURRENT_USER_KEY, &user)
    }

    /// Create an account and log it in
    pub fn register_user(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let user = User::new(name, email);
        self.save_user(user.clone())?;
        self.set_current_user(Some(&user))?;
        tracing::info!(user_id = %user.id, "registered user");
        Ok(user)
    }

    /// Log in by email
    pub fn login(&mut self, email: &str) -> Result<User, AccountError> {
        let user = self
            .find_user_by_email(email)?
            .ok_or_else(|| AccountError::UserNotFound(email.to_string()))?;
        self.set_current_user(Some(&user))?;
        Ok(user)
    }

    /// Clear the logged-in user
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.set_current_user(None)
    }

    // Vehicles

    /// Raw vehicle records. Each one is decoded on its own so a bad record
    /// only affects operations on that vehicle.
    fn vehicle_records(&self) -> Result<Vec<Value>, StoreError> {
        self.read_list(VEHICLES_KEY)
    }

    fn write_vehicle_records(&mut self, records: &[Value]) -> Result<(), StoreError> {
        self.write(VEHICLES_KEY, records)
    }

    /// Every stored vehicle that decodes, regardless of owner.
    ///
    /// Records that fail to decode are skipped with a warning; they can
    /// still be removed with [`LocalStore::delete_vehicle`].
    pub fn all_vehicles(&self) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self
            .vehicle_records()?
            .iter()
            .filter_map(|record| match decode_vehicle(record) {
                Ok(vehicle) => Some(vehicle),
                Err(error) => {
                    tracing::warn!(
                        vehicle_id = record_id(record).unwrap_or("?"),
                        %error,
                        "skipping unreadable vehicle"
                    );
                    None
                }
            })
            .collect())
    }

    /// Vehicles owned by a user, in insertion order
    pub fn vehicles_for_user(&self, user_id: &str) -> Result<Vec<Vehicle>, StoreError> {
        Ok(self
            .all_vehicles()?
            .into_iter()
            .filter(|v| v.user_id == user_id)
            .collect())
    }

    /// Append a vehicle
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), StoreError> {
        let mut records = self.vehicle_records()?;
        records.push(encode_vehicle(&vehicle)?);
        self.write_vehicle_records(&records)
    }

    /// Replace the vehicle with the same id. Returns false if there is none.
    pub fn update_vehicle(&mut self, vehicle: Vehicle) -> Result<bool, StoreError> {
        let mut records = self.vehicle_records()?;
        let Some(slot) = records
            .iter_mut()
            .find(|r| record_id(r) == Some(vehicle.id.as_str()))
        else {
            return Ok(false);
        };
        *slot = encode_vehicle(&vehicle)?;
        self.write_vehicle_records(&records)?;
        Ok(true)
    }

    /// Remove a vehicle. Returns false if there is none.
    pub fn delete_vehicle(&mut self, vehicle_id: &str) -> Result<bool, StoreError> {
        let mut records = self.vehicle_records()?;
        let before = records.len();
        records.retain(|r| record_id(r) != Some(vehicle_id));
        if records.len() == before {
            return Ok(false);
        }
        self.write_vehicle_records(&records)?;
        Ok(true)
    }

    /// Apply `f` to a vehicle's history and persist the result
    fn modify_history<F>(&mut self, vehicle_id: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Vehicle) -> Result<(), StoreError>,
    {
        let mut records = self.vehicle_records()?;
        let slot = records
            .iter_mut()
            .find(|r| record_id(r) == Some(vehicle_id))
            .ok_or_else(|| StoreError::VehicleNotFound(vehicle_id.to_string()))?;
        let mut vehicle = decode_vehicle(slot)?;
        f(&mut vehicle)?;
        *slot = encode_vehicle(&vehicle)?;
        self.write_vehicle_records(&records)
    }

    // Expenses

    /// Every stored expense
    pub fn all_expenses(&self) -> Result<Vec<Expense>, StoreError> {
        self.read_list(EXPENSES_KEY)
    }

    /// Expenses of a vehicle, in insertion order
    pub fn expenses_for_vehicle(&self, vehicle_id: &str) -> Result<Vec<Expense>, StoreError> {
        Ok(self
            .all_expenses()?
            .into_iter()
            .filter(|e| e.vehicle_id == vehicle_id)
            .collect())
    }

    /// Append an expense
    pub fn add_expense(&mut self, expense: Expense) -> Result<(), StoreError> {
        let mut all = self.all_expenses()?;
        all.push(expense);
        self.write(EXPENSES_KEY, &all)
    }

    /// Replace the expense with the same id. Returns false if there is none.
    pub fn update_expense(&mut self, expense: Expense) -> Result<bool, StoreError> {
        let mut all = self.all_expenses()?;
        let Some(slot) = all.iter_mut().find(|e| e.id == expense.id) else {
            return Ok(false);
        };
        *slot = expense;
        self.write(EXPENSES_KEY, &all)?;
        Ok(true)
    }

    /// Remove an expense. Returns false if there is none.
    pub fn delete_expense(&mut self, expense_id: &str) -> Result<bool, StoreError> {
        let mut all = self.all_expenses()?;
        let before = all.len();
        all.retain(|e| e.id != expense_id);
        if all.len() == before {
            return Ok(false);
        }
        self.write(EXPENSES_KEY, &all)?;
        Ok(true)
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Decode one stored vehicle. The history is parsed separately so a bad
/// entry is reported with the part it belongs to.
fn decode_vehicle(record: &Value) -> Result<Vehicle, StoreError> {
    let mut record = record.clone();
    let history = record
        .as_object_mut()
        .and_then(|fields| fields.remove("maintenanceHistory"))
        .unwrap_or(Value::Null);

    let mut vehicle: Vehicle =
        serde_json::from_value(record).map_err(|source| StoreError::Json {
            key: VEHICLES_KEY.to_string(),
            source,
        })?;

    if !history.is_null() {
        let history = MaintenanceHistory::from_json_value(&history).map_err(|source| {
            StoreError::InvalidHistory {
                vehicle_id: vehicle.id.clone(),
                source,
            }
        })?;
        vehicle.maintenance_history = Some(history);
    }
    Ok(vehicle)
}

fn encode_vehicle(vehicle: &Vehicle) -> Result<Value, StoreError> {
    serde_json::to_value(vehicle).map_err(|source| StoreError::Json {
        key: VEHICLES_KEY.to_string(),
        source,
    })
}

impl<B: KeyValueBackend> VehicleStore for LocalStore<B> {
    fn get_vehicle(&self, vehicle_id: &str) -> Result<Option<Vehicle>, StoreError> {
        let records = self.vehicle_records()?;
        records
            .iter()
            .find(|r| record_id(r) == Some(vehicle_id))
            .map(decode_vehicle)
            .transpose()
    }

    fn save_vehicle_history(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        km: u64,
    ) -> Result<(), StoreError> {
        self.modify_history(vehicle_id, |vehicle| {
            vehicle.history_mut().record(part_name, km);
            Ok(())
        })
    }

    fn compare_and_set_history(
        &mut self,
        vehicle_id: &str,
        part_name: &str,
        expected: Option<u64>,
        km: u64,
    ) -> Result<(), StoreError> {
        self.modify_history(vehicle_id, |vehicle| {
            let history = vehicle.history_mut();
            let actual = history.get(part_name);
            if actual != expected {
                return Err(StoreError::Conflict {
                    vehicle_id: vehicle_id.to_string(),
                    part: part_name.to_string(),
                    expected,
                    actual,
                });
            }
            history.record(part_name, km);
            Ok(())
        })
    }
}
