//! Database models for investments and movements.

use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::investments::{
    Investment, InvestmentCategory, InvestmentUpdate, Movement, MovementKind, NewInvestment,
    NewMovement,
};

use crate::utils::{
    format_datetime, format_datetime_opt, format_decimal_opt, parse_datetime, parse_datetime_opt,
    parse_decimal, parse_decimal_opt,
};

/// Database model for investments
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
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestmentDB {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub manager: Option<String>,
    pub category: String,
    pub capital_invested: String,
    pub opened_at: Option<String>,
    pub current_value: Option<String>,
    pub value_as_of: Option<String>,
    pub return_pct: Option<String>,
    pub monthly_income: Option<String>,
    pub units: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for creating a new investment
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestmentDB {
    pub id: Option<String>,
    pub tenant_id: String,
    pub name: String,
    pub manager: Option<String>,
    pub category: String,
    pub capital_invested: String,
    pub opened_at: Option<String>,
    pub current_value: Option<String>,
    pub value_as_of: Option<String>,
    pub return_pct: Option<String>,
    pub monthly_income: Option<String>,
    pub units: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for movements
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    Associations,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(InvestmentDB, foreign_key = investment_id))]
#[diesel(table_name = crate::schema::investment_movements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MovementDB {
    pub id: String,
    pub investment_id: String,
    pub kind: String,
    pub amount: String,
    pub effective_at: String,
    pub created_at: String,
}

/// Database model for appending a movement
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::investment_movements)]
pub struct NewMovementDB {
    pub id: String,
    pub investment_id: String,
    pub kind: String,
    pub amount: String,
    pub effective_at: String,
    pub created_at: String,
}

// Conversion to domain models
impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            name: db.name,
            manager: db.manager,
            category: InvestmentCategory::parse_lenient(&db.category),
            capital_invested: parse_decimal(&db.capital_invested, "capital_invested"),
            opened_at: parse_datetime_opt(db.opened_at.as_deref(), "opened_at"),
            current_value: parse_decimal_opt(db.current_value.as_deref(), "current_value"),
            value_as_of: parse_datetime_opt(db.value_as_of.as_deref(), "value_as_of"),
            return_pct: parse_decimal_opt(db.return_pct.as_deref(), "return_pct"),
            monthly_income: parse_decimal_opt(db.monthly_income.as_deref(), "monthly_income"),
            units: parse_decimal_opt(db.units.as_deref(), "units"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<MovementDB> for Movement {
    fn from(db: MovementDB) -> Self {
        // Stored kinds come from the domain enum, so a mismatch means a
        // corrupted row; surface it as a valuation adjustment of zero
        // effect rather than dropping the record.
        let kind = MovementKind::from_str(&db.kind).unwrap_or_else(|_| {
            log::error!("Unknown movement kind '{}' for movement {}", db.kind, db.id);
            MovementKind::ValuationAdjustment
        });
        Self {
            id: db.id,
            investment_id: db.investment_id,
            kind,
            amount: parse_decimal(&db.amount, "amount"),
            effective_at: parse_datetime(&db.effective_at, "effective_at"),
            created_at: parse_datetime(&db.created_at, "created_at"),
        }
    }
}

impl From<NewInvestment> for NewInvestmentDB {
    fn from(domain: NewInvestment) -> Self {
        let now = format_datetime(chrono::Utc::now());
        Self {
            id: domain.id,
            tenant_id: domain.tenant_id,
            name: domain.name,
            manager: domain.manager,
            category: domain.category.as_str().to_string(),
            capital_invested: domain.capital_invested.to_string(),
            opened_at: format_datetime_opt(domain.opened_at),
            current_value: format_decimal_opt(domain.current_value),
            value_as_of: format_datetime_opt(domain.value_as_of),
            return_pct: format_decimal_opt(domain.return_pct),
            monthly_income: format_decimal_opt(domain.monthly_income),
            units: format_decimal_opt(domain.units),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<NewMovement> for NewMovementDB {
    fn from(domain: NewMovement) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            investment_id: domain.investment_id,
            kind: domain.kind.as_str().to_string(),
            amount: domain.amount.to_string(),
            effective_at: format_datetime(domain.effective_at),
            created_at: format_datetime(chrono::Utc::now()),
        }
    }
}

/// Changeset for updating an investment; timestamps and tenant are
/// filled by the repository from the existing row.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::investments)]
pub struct InvestmentUpdateDB {
    pub name: String,
    pub manager: Option<Option<String>>,
    pub category: String,
    pub capital_invested: String,
    pub opened_at: Option<Option<String>>,
    pub current_value: Option<Option<String>>,
    pub value_as_of: Option<Option<String>>,
    pub return_pct: Option<Option<String>>,
    pub monthly_income: Option<Option<String>>,
    pub units: Option<Option<String>>,
    pub updated_at: String,
}

impl From<InvestmentUpdate> for InvestmentUpdateDB {
    fn from(domain: InvestmentUpdate) -> Self {
        Self {
            name: domain.name,
            manager: Some(domain.manager),
            category: domain.category.as_str().to_string(),
            capital_invested: domain.capital_invested.to_string(),
            opened_at: Some(format_datetime_opt(domain.opened_at)),
            current_value: Some(format_decimal_opt(domain.current_value)),
            value_as_of: Some(format_datetime_opt(domain.value_as_of)),
            return_pct: Some(format_decimal_opt(domain.return_pct)),
            monthly_income: Some(format_decimal_opt(domain.monthly_income)),
            units: Some(format_decimal_opt(domain.units)),
            updated_at: format_datetime(chrono::Utc::now()),
        }
    }
}
