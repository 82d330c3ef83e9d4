//! Database models for other income entries.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::other_income::{
    IncomeFrequency, NewOtherIncome, OtherIncome, OtherIncomeType, OtherIncomeUpdate,
};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for other income entries
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
#[diesel(table_name = crate::schema::other_incomes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OtherIncomeDB {
    pub id: String,
    pub tenant_id: String,
    pub description: String,
    pub amount: String,
    pub frequency: String,
    pub income_type: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for creating a new income entry
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::other_incomes)]
pub struct NewOtherIncomeDB {
    pub id: Option<String>,
    pub tenant_id: String,
    pub description: String,
    pub amount: String,
    pub frequency: String,
    pub income_type: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OtherIncomeDB> for OtherIncome {
    fn from(db: OtherIncomeDB) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            description: db.description,
            amount: parse_decimal(&db.amount, "amount"),
            frequency: IncomeFrequency::parse_lenient(&db.frequency),
            income_type: OtherIncomeType::parse_lenient(&db.income_type),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<NewOtherIncome> for NewOtherIncomeDB {
    fn from(domain: NewOtherIncome) -> Self {
        let now = format_datetime(chrono::Utc::now());
        Self {
            id: domain.id,
            tenant_id: domain.tenant_id,
            description: domain.description,
            amount: domain.amount.to_string(),
            frequency: domain.frequency.as_str().to_string(),
            income_type: domain.income_type.as_str().to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Changeset for updating an income entry.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::other_incomes)]
pub struct OtherIncomeUpdateDB {
    pub description: String,
    pub amount: String,
    pub frequency: String,
    pub income_type: String,
    pub updated_at: String,
}

impl From<OtherIncomeUpdate> for OtherIncomeUpdateDB {
    fn from(domain: OtherIncomeUpdate) -> Self {
        Self {
            description: domain.description,
            amount: domain.amount.to_string(),
            frequency: domain.frequency.as_str().to_string(),
            income_type: domain.income_type.as_str().to_string(),
            updated_at: format_datetime(chrono::Utc::now()),
        }
    }
}
