//! Database models for cashflow months.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::cashflow::{CashflowMonth, CashflowMonthUpsert};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for cashflow months
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
#[diesel(table_name = crate::schema::cashflow_months)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashflowMonthDB {
    pub id: String,
    pub tenant_id: String,
    pub month: String,
    pub income: String,
    pub expenses: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CashflowMonthDB> for CashflowMonth {
    fn from(db: CashflowMonthDB) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            month: db.month,
            income: parse_decimal(&db.income, "income"),
            expenses: parse_decimal(&db.expenses, "expenses"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<CashflowMonthUpsert> for CashflowMonthDB {
    fn from(domain: CashflowMonthUpsert) -> Self {
        let now = format_datetime(chrono::Utc::now());
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tenant_id: domain.tenant_id,
            month: domain.month,
            income: domain.income.to_string(),
            expenses: domain.expenses.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
