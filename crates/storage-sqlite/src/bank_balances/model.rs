//! Database models for bank balance snapshots.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use hearth_core::bank_balances::{BankBalance, BankBalanceUpsert};

use crate::utils::{format_datetime, parse_datetime, parse_decimal};

/// Database model for bank balances
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
#[diesel(table_name = crate::schema::bank_balances)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BankBalanceDB {
    pub id: String,
    pub tenant_id: String,
    pub date: String,
    pub balance: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BankBalanceDB> for BankBalance {
    fn from(db: BankBalanceDB) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            date: db.date,
            balance: parse_decimal(&db.balance, "balance"),
            created_at: parse_datetime(&db.created_at, "created_at"),
            updated_at: parse_datetime(&db.updated_at, "updated_at"),
        }
    }
}

impl From<BankBalanceUpsert> for BankBalanceDB {
    fn from(domain: BankBalanceUpsert) -> Self {
        let now = format_datetime(chrono::Utc::now());
        let date = domain.date_key();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tenant_id: domain.tenant_id,
            date,
            balance: domain.balance.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
