//! Assembles the outward-facing overview snapshot.
//!
//! The composer itself is a pure function of the tenant's entity lists;
//! the service wraps it with the repository reads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::aggregation::aggregate_months;
use super::balance::{extend_flat_series, reconstruct_balance};
use super::overview_model::{
    AllocationSlice, ChartData, DailySeries, InvestmentReturn, Kpis, LiabilitySlice,
    OverviewResponse, RentalSummary, SparklineData,
};
use super::overview_traits::OverviewServiceTrait;
use crate::cashflow::{CashflowMonth, CashflowRepositoryTrait};
use crate::constants::{SERIES_COLORS, SERIES_NAME_MAX_LEN, SPARKLINE_MONTHS};
use crate::errors::Result;
use crate::investments::{InvestmentRepositoryTrait, InvestmentWithMovements};
use crate::liabilities::{Liability, LiabilityRepositoryTrait};
use crate::other_income::{OtherIncome, OtherIncomeRepositoryTrait};
use crate::rentals::{Rental, RentalRepositoryTrait, RentalStatus};

fn chart_name(name: &str) -> String {
    if name.chars().count() > SERIES_NAME_MAX_LEN {
        let truncated: String = name.chars().take(SERIES_NAME_MAX_LEN - 2).collect();
        format!("{}\u{2026}", truncated)
    } else {
        name.to_string()
    }
}

fn daily_series(
    investments: &[InvestmentWithMovements],
    now: DateTime<Utc>,
) -> Vec<DailySeries> {
    let reconstructed: Vec<_> = investments
        .iter()
        .map(|inv| reconstruct_balance(&inv.investment, &inv.movements))
        .collect();

    // Single-point series stretch to the latest point on any chart so
    // flat lines stay visible across the full range.
    let horizon = reconstructed
        .iter()
        .flat_map(|r| r.points.iter().map(|p| p.timestamp))
        .max()
        .map_or(now, |t| t.max(now));

    investments
        .iter()
        .zip(reconstructed)
        .enumerate()
        .map(|(idx, (inv, balance))| DailySeries {
            name: chart_name(&inv.investment.name),
            data: extend_flat_series(balance.points, horizon),
            color: SERIES_COLORS[idx % SERIES_COLORS.len()].to_string(),
        })
        .collect()
}

fn allocation(investments: &[InvestmentWithMovements]) -> Vec<AllocationSlice> {
    let mut slices: Vec<AllocationSlice> = Vec::new();
    for inv in investments {
        let value = inv.investment.effective_value();
        match slices
            .iter_mut()
            .find(|s| s.category == inv.investment.category)
        {
            Some(slice) => slice.value += value,
            None => slices.push(AllocationSlice {
                category: inv.investment.category,
                value,
            }),
        }
    }
    slices
}

fn returns(investments: &[InvestmentWithMovements], total: Decimal) -> Vec<InvestmentReturn> {
    investments
        .iter()
        .map(|inv| {
            let value = inv.investment.effective_value();
            let share = if total > Decimal::ZERO {
                value / total
            } else {
                Decimal::ZERO
            };
            InvestmentReturn {
                name: inv.investment.name.clone(),
                value,
                return_pct: inv.investment.return_pct.unwrap_or(Decimal::ZERO),
                monthly_income: inv.investment.monthly_income.unwrap_or(Decimal::ZERO),
                share,
            }
        })
        .collect()
}

/// Composes the overview snapshot from a tenant's entity lists.
///
/// Pure function; `now` anchors the trailing month windows.
pub fn compose_overview(
    investments: &[InvestmentWithMovements],
    liabilities: &[Liability],
    rentals: &[Rental],
    cashflow_months: &[CashflowMonth],
    other_incomes: &[OtherIncome],
    now: DateTime<Utc>,
) -> OverviewResponse {
    let aggregate = aggregate_months(
        investments,
        liabilities,
        rentals,
        cashflow_months,
        other_incomes,
        now,
    );

    let total_investments: Decimal = investments
        .iter()
        .map(|i| i.investment.effective_value())
        .sum();
    let total_liabilities: Decimal = liabilities
        .iter()
        .map(|l| l.balance.unwrap_or(Decimal::ZERO))
        .sum();
    let monthly_rent_income: Decimal = rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Rented)
        .map(|r| r.monthly_rent)
        .sum();

    let liabilities_breakdown = liabilities
        .iter()
        .map(|l| LiabilitySlice {
            category: l.category,
            monthly_payment: l.monthly_payment,
            balance: l.balance.unwrap_or(Decimal::ZERO),
        })
        .collect();

    let rentals_list = rentals
        .iter()
        .map(|r| RentalSummary {
            id: r.id.clone(),
            property_name: r.property_name.clone(),
            monthly_rent: r.monthly_rent,
            status: r.status,
            tenant_name: r.tenant_name.clone().unwrap_or_default(),
        })
        .collect();

    let months = aggregate.cashflow.months();
    let tail_start = months.len().saturating_sub(SPARKLINE_MONTHS);
    let tail = &months[tail_start..];
    let sparkline_data = SparklineData {
        net: tail.iter().map(|m| m.net).collect(),
        income: tail.iter().map(|m| m.income).collect(),
    };

    // Trend: current KPI net versus the prior sparkline month. A zero
    // prior net reads as no trend rather than a division error.
    let prev_net = if tail.len() >= 2 {
        tail[tail.len() - 2].net
    } else {
        Decimal::ZERO
    };
    let net_trend_pct = if prev_net != Decimal::ZERO {
        (aggregate.monthly_net - prev_net) / prev_net.abs() * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    OverviewResponse {
        kpis: Kpis {
            total_investments,
            total_liabilities,
            monthly_rent_income,
            monthly_income: aggregate.monthly_income,
            monthly_expenses: aggregate.monthly_expenses,
            monthly_net_cashflow: aggregate.monthly_net,
            net_trend_pct,
        },
        sparkline_data,
        charts: ChartData {
            investment_allocation: allocation(investments),
            investment_returns: returns(investments, total_investments),
            investment_trend: aggregate.investment_trend,
            investment_trend_daily: daily_series(investments, now),
            liabilities_breakdown,
            cashflow_trend: aggregate.cashflow,
            rentals: rentals_list,
        },
    }
}

/// Service loading a tenant's entities and composing the snapshot.
pub struct OverviewService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    liability_repository: Arc<dyn LiabilityRepositoryTrait>,
    rental_repository: Arc<dyn RentalRepositoryTrait>,
    cashflow_repository: Arc<dyn CashflowRepositoryTrait>,
    other_income_repository: Arc<dyn OtherIncomeRepositoryTrait>,
}

impl OverviewService {
    pub fn new(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        liability_repository: Arc<dyn LiabilityRepositoryTrait>,
        rental_repository: Arc<dyn RentalRepositoryTrait>,
        cashflow_repository: Arc<dyn CashflowRepositoryTrait>,
        other_income_repository: Arc<dyn OtherIncomeRepositoryTrait>,
    ) -> Self {
        Self {
            investment_repository,
            liability_repository,
            rental_repository,
            cashflow_repository,
            other_income_repository,
        }
    }
}

impl OverviewServiceTrait for OverviewService {
    fn get_overview(&self, tenant_id: &str) -> Result<OverviewResponse> {
        let investments = self.investment_repository.list_with_movements(tenant_id)?;
        let liabilities = self.liability_repository.list(tenant_id)?;
        let rentals = self.rental_repository.list(tenant_id)?;
        let cashflow_months = self.cashflow_repository.list(tenant_id)?;
        let other_incomes = self.other_income_repository.list(tenant_id)?;

        log::debug!(
            "Composing overview for tenant {}: {} investments, {} liabilities, {} cashflow rows",
            tenant_id,
            investments.len(),
            liabilities.len(),
            cashflow_months.len()
        );

        Ok(compose_overview(
            &investments,
            &liabilities,
            &rentals,
            &cashflow_months,
            &other_incomes,
            Utc::now(),
        ))
    }
}
