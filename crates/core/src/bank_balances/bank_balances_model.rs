//! Bank balance domain models.
//!
//! Bank balances are a purely logged series, independent of the overview
//! engine's cashflow math.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a dated bank balance snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankBalance {
    pub id: String,
    pub tenant_id: String,
    /// Snapshot date in `YYYY-MM-DD` form, unique per tenant.
    pub date: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for upserting a bank balance, keyed by `(tenant, date)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankBalanceUpsert {
    #[serde(default)]
    pub tenant_id: String,
    pub date: String,
    pub balance: Decimal,
}

impl BankBalanceUpsert {
    /// Validates the tenant and date key. Datetime-like input is accepted
    /// and truncated to its date part.
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        let date_part = self.date_key();
        if NaiveDate::parse_from_str(&date_part, "%Y-%m-%d").is_err() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Date must be in YYYY-MM-DD form, got '{}'",
                self.date
            ))));
        }
        Ok(())
    }

    /// Returns the date part of the key, dropping any time suffix.
    pub fn date_key(&self) -> String {
        match self.date.split_once('T') {
            Some((date, _)) => date.to_string(),
            None => self.date.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn upsert(date: &str) -> BankBalanceUpsert {
        BankBalanceUpsert {
            tenant_id: "fam-1".to_string(),
            date: date.to_string(),
            balance: dec!(150000),
        }
    }

    #[test]
    fn datetime_input_truncates_to_date() {
        let row = upsert("2026-03-14T10:30:00");
        assert!(row.validate().is_ok());
        assert_eq!(row.date_key(), "2026-03-14");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(upsert("14/03/2026").validate().is_err());
        assert!(upsert("").validate().is_err());
    }
}
