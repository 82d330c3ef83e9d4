//! Liability domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{errors::ValidationError, Error, Result};

/// Liability category for the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiabilityCategory {
    Mortgage,
    CreditCard,
    ConsumerLoan,
    Payroll,
    Holding,
    Bank,
    #[default]
    Other,
}

impl LiabilityCategory {
    /// Parses a category, falling back to `Other` for unknown values.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "MORTGAGE" => Self::Mortgage,
            "CREDIT_CARD" => Self::CreditCard,
            "CONSUMER_LOAN" => Self::ConsumerLoan,
            "PAYROLL" => Self::Payroll,
            "HOLDING" => Self::Holding,
            "BANK" => Self::Bank,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mortgage => "MORTGAGE",
            Self::CreditCard => "CREDIT_CARD",
            Self::ConsumerLoan => "CONSUMER_LOAN",
            Self::Payroll => "PAYROLL",
            Self::Holding => "HOLDING",
            Self::Bank => "BANK",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for LiabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a liability.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub category: LiabilityCategory,
    /// Outstanding balance, when known.
    pub balance: Option<Decimal>,
    pub monthly_payment: Decimal,
    /// Annual interest rate as a 0-1 fraction.
    pub interest_rate: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new liability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLiability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub category: LiabilityCategory,
    pub balance: Option<Decimal>,
    pub monthly_payment: Decimal,
    pub interest_rate: Option<Decimal>,
}

impl NewLiability {
    /// Validates the new liability data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Liability name cannot be empty".to_string(),
            )));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        if self.monthly_payment < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Monthly payment must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing liability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityUpdate {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: LiabilityCategory,
    pub balance: Option<Decimal>,
    pub monthly_payment: Decimal,
    pub interest_rate: Option<Decimal>,
}

impl LiabilityUpdate {
    /// Validates the liability update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Liability ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Liability name cannot be empty".to_string(),
            )));
        }
        if self.monthly_payment < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Monthly payment must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize_fraction;
    use rust_decimal_macros::dec;

    #[test]
    fn interest_rate_percentage_input_normalizes() {
        // "8.9" entered as a percentage stores as 0.089
        assert_eq!(normalize_fraction(dec!(8.9)), dec!(0.089));
        // Already-fractional input is left alone
        assert_eq!(normalize_fraction(dec!(0.045)), dec!(0.045));
    }

    #[test]
    fn category_falls_back_to_other() {
        assert_eq!(
            LiabilityCategory::parse_lenient("mortgage"),
            LiabilityCategory::Mortgage
        );
        assert_eq!(
            LiabilityCategory::parse_lenient("CAR_LEASE"),
            LiabilityCategory::Other
        );
    }

    #[test]
    fn new_liability_requires_name() {
        let liability = NewLiability {
            id: None,
            tenant_id: "fam-1".to_string(),
            name: String::new(),
            category: LiabilityCategory::Other,
            balance: None,
            monthly_payment: dec!(100),
            interest_rate: None,
        };
        assert!(liability.validate().is_err());
    }
}
