//! Cashflow month domain models.
//!
//! A cashflow month is an authoritative, externally supplied actuals row.
//! When one exists for a month it overrides every derived estimate for
//! that month in the overview.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::is_valid_month_key;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing one month of actual income and expenses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CashflowMonth {
    pub id: String,
    pub tenant_id: String,
    /// Month key in `YYYY-MM` form, unique per tenant.
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for upserting a cashflow month, keyed by `(tenant, month)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowMonthUpsert {
    #[serde(default)]
    pub tenant_id: String,
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

impl CashflowMonthUpsert {
    /// Validates the month key and tenant.
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        if !is_valid_month_key(&self.month) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Month must be in YYYY-MM form, got '{}'",
                self.month
            ))));
        }
        Ok(())
    }
}
