//! Stored records
//!
//! Users, vehicles and expenses as they are kept in local storage. Field
//! names serialize in camelCase so existing storage blobs load unchanged.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::maintenance::MaintenanceHistory;

/// Generate a new opaque record id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A registered driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque id
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
}

impl User {
    /// Create a user with a fresh id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Kind of vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Car
    #[default]
    Carro,
    /// Motorcycle
    Moto,
}

/// A vehicle owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Opaque id
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Car or motorcycle
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// License plate
    pub plate: String,
    /// Current odometer reading in km
    pub current_km: u64,
    /// Fuel the vehicle runs on ("Flex", "Gasolina", ...)
    pub fuel_type: String,
    /// Recommended oil specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_type: Option<String>,
    /// Odometer reading at the last oil change, as typed by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_oil_change_km: Option<u64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    /// Creation time, milliseconds since the Unix epoch
    pub created_at: i64,
    /// Km of the last service per maintenance item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_history: Option<MaintenanceHistory>,
}

impl Vehicle {
    /// Create a vehicle with a fresh id and creation time
    pub fn new(
        user_id: impl Into<String>,
        vehicle_type: VehicleType,
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        current_km: u64,
    ) -> Self {
        Self {
            id: new_id(),
            user_id: user_id.into(),
            vehicle_type,
            brand: brand.into(),
            model: model.into(),
            year,
            plate: String::new(),
            current_km,
            fuel_type: "Flex".to_string(),
            oil_type: None,
            last_oil_change_km: None,
            observations: None,
            created_at: Utc::now().timestamp_millis(),
            maintenance_history: None,
        }
    }

    /// "Brand Model", as shown in the vehicle selector
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// History map, created on first use
    pub fn history_mut(&mut self) -> &mut MaintenanceHistory {
        self.maintenance_history.get_or_insert_with(MaintenanceHistory::new)
    }
}

/// Spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Fuel
    Combustivel,
    /// Maintenance and repairs
    Manutencao,
    /// Taxes and fees
    Imposto,
    /// Insurance
    Seguro,
    /// Anything else
    Outros,
}

impl ExpenseCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Combustivel => "Combustível",
            ExpenseCategory::Manutencao => "Manutenção",
            ExpenseCategory::Imposto => "Imposto",
            ExpenseCategory::Seguro => "Seguro",
            ExpenseCategory::Outros => "Outros",
        }
    }
}

/// A single expense entry for a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Opaque id
    pub id: String,
    /// Vehicle the money was spent on
    pub vehicle_id: String,
    /// Spending category
    pub category: ExpenseCategory,
    /// Amount in BRL
    pub amount: f64,
    /// Day of the expense, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Free-form description
    pub description: String,
}

impl Expense {
    /// Create an expense with a fresh id
    pub fn new(
        vehicle_id: impl Into<String>,
        category: ExpenseCategory,
        amount: f64,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            vehicle_id: vehicle_id.into(),
            category,
            amount,
            date,
            description: description.into(),
        }
    }
}
