//! Monthly aggregation output models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the cashflow trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    /// `YYYY-MM` month key.
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// Cashflow trend, tagged by provenance.
///
/// A tenant with any externally supplied actuals gets the authoritative
/// branch: those rows are the truth and missing months stay absent. A
/// tenant without actuals gets a derived estimate for each of the
/// trailing twelve months. The tag keeps the branching explicit instead
/// of scattering boolean checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "months", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashflowSeries {
    Authoritative(Vec<MonthlyCashflow>),
    Derived(Vec<MonthlyCashflow>),
}

impl CashflowSeries {
    /// The months of the series, ascending, regardless of provenance.
    pub fn months(&self) -> &[MonthlyCashflow] {
        match self {
            Self::Authoritative(months) | Self::Derived(months) => months,
        }
    }

    pub fn is_authoritative(&self) -> bool {
        matches!(self, Self::Authoritative(_))
    }
}

/// One investment's clamped balance as of a month's end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentMonthBalance {
    pub name: String,
    pub balance: Decimal,
}

/// Month-end balances across all investments, for the stacked trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTrendPoint {
    /// Month key, except for the most recent month which carries the
    /// exact `YYYY-MM-DD` date of the latest manual valuation when one
    /// falls inside that month.
    pub month: String,
    pub balances: Vec<InvestmentMonthBalance>,
    pub total: Decimal,
}

/// Everything the monthly aggregator derives for a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    pub cashflow: CashflowSeries,
    pub investment_trend: Vec<InvestmentTrendPoint>,
    /// Chosen-month KPI figures: the newest authoritative row when one
    /// exists, else the derived estimate for the current month.
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_net: Decimal,
    /// Constant monthly-equivalent total of the tenant's other income.
    pub other_income_monthly: Decimal,
}
