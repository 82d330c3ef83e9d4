//! Overview snapshot payload models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregation::CashflowSeries;
use super::aggregation::InvestmentTrendPoint;
use super::balance::BalancePoint;
use crate::investments::InvestmentCategory;
use crate::liabilities::LiabilityCategory;
use crate::rentals::RentalStatus;

/// Headline figures shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total_investments: Decimal,
    pub total_liabilities: Decimal,
    pub monthly_rent_income: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_net_cashflow: Decimal,
    /// Percent change of the chosen month's net versus the prior
    /// sparkline month, 0 when the prior net is 0.
    pub net_trend_pct: Decimal,
}

/// Trailing six-month net and income values backing the KPI sparkline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SparklineData {
    pub net: Vec<Decimal>,
    pub income: Vec<Decimal>,
}

/// Investment value summed per category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub category: InvestmentCategory,
    pub value: Decimal,
}

/// Per-investment return and portfolio share figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReturn {
    pub name: String,
    pub value: Decimal,
    pub return_pct: Decimal,
    pub monthly_income: Decimal,
    /// Fraction of total investment value, 0 when the total is 0.
    pub share: Decimal,
}

/// Per-liability payment and balance figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiabilitySlice {
    pub category: LiabilityCategory,
    pub monthly_payment: Decimal,
    pub balance: Decimal,
}

/// One investment's reconstructed balance line, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySeries {
    pub name: String,
    pub data: Vec<BalancePoint>,
    pub color: String,
}

/// Rental row as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalSummary {
    pub id: String,
    pub property_name: String,
    pub monthly_rent: Decimal,
    pub status: RentalStatus,
    pub tenant_name: String,
}

/// All chart series of the overview snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub investment_allocation: Vec<AllocationSlice>,
    pub investment_returns: Vec<InvestmentReturn>,
    pub investment_trend: Vec<InvestmentTrendPoint>,
    pub investment_trend_daily: Vec<DailySeries>,
    pub liabilities_breakdown: Vec<LiabilitySlice>,
    pub cashflow_trend: CashflowSeries,
    pub rentals: Vec<RentalSummary>,
}

/// The full overview snapshot for one tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub kpis: Kpis,
    pub sparkline_data: SparklineData,
    pub charts: ChartData,
}
