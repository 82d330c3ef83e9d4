//! Rental property domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Occupancy status of a rental property. Only rented properties
/// contribute to income totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Rented,
    #[default]
    Vacant,
}

impl RentalStatus {
    /// Parses a status, falling back to `Vacant` for unknown values.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "RENTED" => Self::Rented,
            _ => Self::Vacant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rented => "RENTED",
            Self::Vacant => "VACANT",
        }
    }
}

/// Domain model representing a rental property.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub tenant_id: String,
    pub property_name: String,
    pub monthly_rent: Decimal,
    pub status: RentalStatus,
    /// Name of the occupying tenant, when rented.
    pub tenant_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRental {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tenant_id: String,
    pub property_name: String,
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub status: RentalStatus,
    pub tenant_name: Option<String>,
}

impl NewRental {
    /// Validates the new rental data.
    pub fn validate(&self) -> Result<()> {
        if self.property_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Property name cannot be empty".to_string(),
            )));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        if self.monthly_rent < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Monthly rent must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalUpdate {
    pub id: Option<String>,
    pub property_name: String,
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub status: RentalStatus,
    pub tenant_name: Option<String>,
}

impl RentalUpdate {
    /// Validates the rental update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Rental ID is required for updates".to_string(),
            )));
        }
        if self.property_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Property name cannot be empty".to_string(),
            )));
        }
        if self.monthly_rent < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Monthly rent must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}
