//! Database models for liabilities.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::liabilities::{Liability, LiabilityCategory, LiabilityUpdate, NewLiability};

use crate::utils::{
    format_datetime, format_decimal_opt, parse_datetime, parse_decimal, parse_decimal_opt,
};

/// Database model for liabilities
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
#[diesel(table_name = crate::schema::liabilities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LiabilityDB {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub category: String,
    pub balance: Option<String>,
    pub monthly_payment: String,
    pub interest_rate: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for creating a new liability
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::liabilities)]
pub struct NewLiabilityDB {
    pub id: Option<String>,
    pub tenant_id: String,
    pub name: String,
    pub category: String,
    pub balance: Option<String>,
    pub monthly_payment: String,
    pub interest_rate: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<LiabilityDB> for Liability {
    fn from(db: LiabilityDB) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            name: db.name,
            category: LiabilityCategory::parse_lenient(&db.category),
            balance: parse_decimal_opt(db.balance.as_deref(), "balance"),
            monthly_payment: parse_decimal(&db.monthly_payment, "monthly_payment"),
            interest_rate: parse_decimal_opt(db.interest_rate.as_deref(), "interest_rate"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<NewLiability> for NewLiabilityDB {
    fn from(domain: NewLiability) -> Self {
        let now = format_datetime(chrono::Utc::now());
        Self {
            id: domain.id,
            tenant_id: domain.tenant_id,
            name: domain.name,
            category: domain.category.as_str().to_string(),
            balance: format_decimal_opt(domain.balance),
            monthly_payment: domain.monthly_payment.to_string(),
            interest_rate: format_decimal_opt(domain.interest_rate),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Changeset for updating a liability.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::liabilities)]
pub struct LiabilityUpdateDB {
    pub name: String,
    pub category: String,
    pub balance: Option<Option<String>>,
    pub monthly_payment: String,
    pub interest_rate: Option<Option<String>>,
    pub updated_at: String,
}

impl From<LiabilityUpdate> for LiabilityUpdateDB {
    fn from(domain: LiabilityUpdate) -> Self {
        Self {
            name: domain.name,
            category: domain.category.as_str().to_string(),
            balance: Some(format_decimal_opt(domain.balance)),
            monthly_payment: domain.monthly_payment.to_string(),
            interest_rate: Some(format_decimal_opt(domain.interest_rate)),
            updated_at: format_datetime(chrono::Utc::now()),
        }
    }
}
