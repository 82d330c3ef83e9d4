//! Other income domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Recording frequency of an income entry. Every entry is converted to a
/// monthly-equivalent figure before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeFrequency {
    #[default]
    Monthly,
    Weekly,
    Quarterly,
    Annual,
}

impl IncomeFrequency {
    /// Parses a frequency, falling back to `Monthly` for unknown values.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "WEEKLY" => Self::Weekly,
            "QUARTERLY" => Self::Quarterly,
            "ANNUAL" => Self::Annual,
            _ => Self::Monthly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Quarterly => "QUARTERLY",
            Self::Annual => "ANNUAL",
        }
    }
}

/// Type tag for an income entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OtherIncomeType {
    #[default]
    Other,
    CompanyDividends,
}

impl OtherIncomeType {
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "COMPANY_DIVIDENDS" => Self::CompanyDividends,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Other => "OTHER",
            Self::CompanyDividends => "COMPANY_DIVIDENDS",
        }
    }
}

/// Domain model representing a recurring income entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncome {
    pub id: String,
    pub tenant_id: String,
    pub description: String,
    pub amount: Decimal,
    pub frequency: IncomeFrequency,
    pub income_type: OtherIncomeType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OtherIncome {
    /// Monthly-equivalent figure for this entry.
    ///
    /// Weekly amounts use the 4.33 weeks-per-month convention.
    pub fn monthly_equivalent(&self) -> Decimal {
        match self.frequency {
            IncomeFrequency::Monthly => self.amount,
            IncomeFrequency::Weekly => self.amount * dec!(4.33),
            IncomeFrequency::Quarterly => self.amount / dec!(3),
            IncomeFrequency::Annual => self.amount / dec!(12),
        }
    }
}

/// Sums the monthly equivalents of a tenant's income entries.
pub fn monthly_equivalent_total(incomes: &[OtherIncome]) -> Decimal {
    incomes.iter().map(OtherIncome::monthly_equivalent).sum()
}

/// Input model for creating a new income entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOtherIncome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tenant_id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: IncomeFrequency,
    #[serde(default)]
    pub income_type: OtherIncomeType,
}

impl NewOtherIncome {
    /// Validates the new income entry.
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Description cannot be empty".to_string(),
            )));
        }
        if self.tenant_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "tenantId".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing income entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncomeUpdate {
    pub id: Option<String>,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub frequency: IncomeFrequency,
    #[serde(default)]
    pub income_type: OtherIncomeType,
}

impl OtherIncomeUpdate {
    /// Validates the income entry update.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income entry ID is required for updates".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Description cannot be empty".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Amount must be zero or greater".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(amount: Decimal, frequency: IncomeFrequency) -> OtherIncome {
        OtherIncome {
            amount,
            frequency,
            ..Default::default()
        }
    }

    #[test]
    fn monthly_equivalents_use_fixed_multipliers() {
        assert_eq!(
            entry(dec!(100), IncomeFrequency::Monthly).monthly_equivalent(),
            dec!(100)
        );
        assert_eq!(
            entry(dec!(100), IncomeFrequency::Weekly).monthly_equivalent(),
            dec!(433)
        );
        assert_eq!(
            entry(dec!(300), IncomeFrequency::Quarterly).monthly_equivalent(),
            dec!(100)
        );
        assert_eq!(
            entry(dec!(1200), IncomeFrequency::Annual).monthly_equivalent(),
            dec!(100)
        );
    }

    #[test]
    fn total_sums_across_frequencies() {
        let incomes = vec![
            entry(dec!(100), IncomeFrequency::Monthly),
            entry(dec!(1200), IncomeFrequency::Annual),
        ];
        assert_eq!(monthly_equivalent_total(&incomes), dec!(200));
    }
}
