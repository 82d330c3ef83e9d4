//! Investment domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{errors::ValidationError, Error, Result};

/// Investment category for allocation groupings.
///
/// Unknown input values fall back to `Other` instead of rejecting the
/// record, so imports never drop a row over a category typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentCategory {
    Fund,
    Equity,
    FixedIncome,
    RealEstate,
    #[default]
    Other,
}

impl InvestmentCategory {
    /// Parses a category, falling back to `Other` for unknown values.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "FUND" => Self::Fund,
            "EQUITY" => Self::Equity,
            "FIXED_INCOME" => Self::FixedIncome,
            "REAL_ESTATE" => Self::RealEstate,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fund => "FUND",
            Self::Equity => "EQUITY",
            Self::FixedIncome => "FIXED_INCOME",
            Self::RealEstate => "REAL_ESTATE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// Kind of a dated transaction against an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementKind {
    /// Capital added to the investment (unsigned amount).
    Contribution,
    /// Capital taken out, treated as realized income in cash flow (unsigned amount).
    Withdrawal,
    /// Signed delta recording the gap between a manually entered current
    /// value and the previously reconstructed balance.
    ValuationAdjustment,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contribution => "CONTRIBUTION",
            Self::Withdrawal => "WITHDRAWAL",
            Self::ValuationAdjustment => "VALUATION_ADJUSTMENT",
        }
    }
}

impl FromStr for MovementKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CONTRIBUTION" => Ok(Self::Contribution),
            "WITHDRAWAL" => Ok(Self::Withdrawal),
            "VALUATION_ADJUSTMENT" => Ok(Self::ValuationAdjustment),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown movement kind '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing an investment in the system.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    /// Managing fund company, when the product has one.
    pub manager: Option<String>,
    pub category: InvestmentCategory,
    pub capital_invested: Decimal,
    /// Opening date of the product. When absent the record creation
    /// timestamp is the fallback opening point.
    pub opened_at: Option<DateTime<Utc>>,
    /// Manually entered current value snapshot.
    pub current_value: Option<Decimal>,
    /// As-of date of the manual current value.
    pub value_as_of: Option<DateTime<Utc>>,
    /// Declared return, stored as a 0-1 fraction.
    pub return_pct: Option<Decimal>,
    /// Declared monthly income of the product.
    pub monthly_income: Option<Decimal>,
    pub units: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    /// Effective opening instant: explicit opening date, else creation time.
    pub fn opening_instant(&self) -> DateTime<Utc> {
        self.opened_at.unwrap_or(self.created_at)
    }

    /// Displayed value: manual current value when present, else opening capital.
    pub fn effective_value(&self) -> Decimal {
        self.current_value.unwrap_or(self.capital_invested)
    }
}

/// An investment together with its movement log, movements ascending by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentWithMovements {
    #[serde(flatten)]
    pub investment: Investment,
    pub movements: Vec<Movement>,
}

/// A dated transaction against an investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub investment_id: String,
    pub kind: MovementKind,
    pub amount: Decimal,
    pub effective_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tenant_id: String,
    pub name: String,
    pub manager: Option<String>,
    #[serde(default)]
    pub category: InvestmentCategory,
    pub capital_invested: Decimal,
    pub opened_at: Option<DateTime<Utc>>,
    pub current_value: Option<Decimal>,
    pub value_as_of: Option<DateTime<Utc>>,
    pub return_pct: Option<Decimal>,
    pub monthly_income: Option<Decimal>,
    pub units: Option<Decimal>,
}

impl NewInvestment {
    /// Validates the new investment data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment name cannot be empty".to_string(),
            )));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        if self.capital_invested < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Opening capital must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub id: Option<String>,
    pub name: String,
    pub manager: Option<String>,
    #[serde(default)]
    pub category: InvestmentCategory,
    pub capital_invested: Decimal,
    pub opened_at: Option<DateTime<Utc>>,
    pub current_value: Option<Decimal>,
    pub value_as_of: Option<DateTime<Utc>>,
    pub return_pct: Option<Decimal>,
    pub monthly_income: Option<Decimal>,
    pub units: Option<Decimal>,
}

impl InvestmentUpdate {
    /// Validates the investment update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investment name cannot be empty".to_string(),
            )));
        }
        if self.capital_invested < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Opening capital must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for recording a movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    #[serde(default)]
    pub investment_id: String,
    pub kind: MovementKind,
    pub amount: Decimal,
    pub effective_at: DateTime<Utc>,
}

impl NewMovement {
    /// Validates the movement.
    ///
    /// Contributions and withdrawals carry unsigned amounts and must be
    /// positive; valuation adjustments are signed deltas and may be
    /// negative or zero.
    pub fn validate(&self) -> Result<()> {
        if self.investment_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "investmentId".to_string(),
            )));
        }
        if self.kind != MovementKind::ValuationAdjustment && self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Movement amount must be greater than zero".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for correcting an existing movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementUpdate {
    #[serde(default)]
    pub id: String,
    pub kind: Option<MovementKind>,
    pub amount: Option<Decimal>,
    pub effective_at: Option<DateTime<Utc>>,
}

impl MovementUpdate {
    /// Validates the correction against the movement being edited.
    ///
    /// The amount sign rule depends on the kind the movement will have
    /// after the edit.
    pub fn validate(&self, current_kind: MovementKind) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Movement ID is required for updates".to_string(),
            )));
        }
        let effective_kind = self.kind.unwrap_or(current_kind);
        if let Some(amount) = self.amount {
            if effective_kind != MovementKind::ValuationAdjustment && amount <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Movement amount must be greater than zero".to_string(),
                )));
            }
        }
        Ok(())
    }

    /// True when the correction changes nothing.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.amount.is_none() && self.effective_at.is_none()
    }
}
