//! Database models for rentals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::rentals::{NewRental, Rental, RentalStatus, RentalUpdate};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for rentals
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::rentals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RentalDB {
    pub id: String,
    pub tenant_id: String,
    pub property_name: String,
    pub monthly_rent: String,
    pub status: String,
    pub tenant_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for creating a new rental
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::rentals)]
pub struct NewRentalDB {
    pub id: Option<String>,
    pub tenant_id: String,
    pub property_name: String,
    pub monthly_rent: String,
    pub status: String,
    pub tenant_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RentalDB> for Rental {
    fn from(db: RentalDB) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            property_name: db.property_name,
            monthly_rent: parse_decimal(&db.monthly_rent, "monthly_rent"),
            status: RentalStatus::parse_lenient(&db.status),
            tenant_name: db.tenant_name,
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<NewRental> for NewRentalDB {
    fn from(domain: NewRental) -> Self {
        let now = format_datetime(chrono::Utc::now());
        Self {
            id: domain.id,
            tenant_id: domain.tenant_id,
            property_name: domain.property_name,
            monthly_rent: domain.monthly_rent.to_string(),
            status: domain.status.as_str().to_string(),
            tenant_name: domain.tenant_name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Changeset for updating a rental.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::rentals)]
pub struct RentalUpdateDB {
    pub property_name: String,
    pub monthly_rent: String,
    pub status: String,
    pub tenant_name: Option<Option<String>>,
    pub updated_at: String,
}

impl From<RentalUpdate> for RentalUpdateDB {
    fn from(domain: RentalUpdate) -> Self {
        Self {
            property_name: domain.property_name,
            monthly_rent: domain.monthly_rent.to_string(),
            status: domain.status.as_str().to_string(),
            tenant_name: Some(domain.tenant_name),
            updated_at: format_datetime(chrono::Utc::now()),
        }
    }
}
