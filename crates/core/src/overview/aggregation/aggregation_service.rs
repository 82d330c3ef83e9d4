//! Folds a tenant's entities into trailing-twelve-month figures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::aggregation_model::{
    CashflowSeries, InvestmentMonthBalance, InvestmentTrendPoint, MonthlyAggregate,
    MonthlyCashflow,
};
use crate::cashflow::CashflowMonth;
use crate::constants::TREND_MONTHS;
use crate::investments::{InvestmentWithMovements, MovementKind};
use crate::liabilities::Liability;
use crate::other_income::{monthly_equivalent_total, OtherIncome};
use crate::rentals::{Rental, RentalStatus};
use crate::utils::{end_of_month, month_key, trailing_month_keys};

/// Sums withdrawal movements per `YYYY-MM` bucket across all of a
/// tenant's investments. Withdrawals are treated as realized investment
/// income (interest/dividends) in the cashflow view.
pub fn withdrawals_by_month(
    investments: &[InvestmentWithMovements],
) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for inv in investments {
        for movement in &inv.movements {
            if movement.kind == MovementKind::Withdrawal {
                let key = month_key(movement.effective_at.date_naive());
                *totals.entry(key).or_insert(Decimal::ZERO) += movement.amount;
            }
        }
    }
    totals
}

/// Walks an investment's opening capital forward through every movement
/// dated on-or-before `cutoff`. An investment opened after the cutoff
/// contributes explicitly zero so month totals stay consistent. The
/// final value is clamped at zero.
fn balance_as_of(inv: &InvestmentWithMovements, cutoff: DateTime<Utc>) -> Decimal {
    if inv.investment.opening_instant() > cutoff {
        return Decimal::ZERO;
    }
    let mut value = inv.investment.capital_invested;
    for movement in &inv.movements {
        if movement.effective_at <= cutoff {
            value += match movement.kind {
                MovementKind::Contribution => movement.amount,
                MovementKind::Withdrawal => -movement.amount,
                MovementKind::ValuationAdjustment => movement.amount,
            };
        }
    }
    value.max(Decimal::ZERO)
}

/// Label for the most recent trend month: the exact as-of date of the
/// latest manual valuation across investments when that date falls
/// within the month, else the plain month key.
fn final_month_label(investments: &[InvestmentWithMovements], last_month_key: &str) -> String {
    let latest_valuation = investments
        .iter()
        .filter(|i| i.investment.current_value.is_some())
        .filter_map(|i| i.investment.value_as_of)
        .max();

    match latest_valuation {
        Some(as_of) if month_key(as_of.date_naive()).as_str() >= last_month_key => {
            as_of.date_naive().format("%Y-%m-%d").to_string()
        }
        _ => last_month_key.to_string(),
    }
}

/// Builds the per-investment month-end balance series over the trailing
/// twelve months.
fn investment_trend(
    investments: &[InvestmentWithMovements],
    months: &[String],
) -> Vec<InvestmentTrendPoint> {
    let last_key = months.last().cloned().unwrap_or_default();

    months
        .iter()
        .map(|key| {
            let is_last = *key == last_key;
            let cutoff = match end_of_month(key) {
                Some(end) => end,
                None => return InvestmentTrendPoint {
                    month: key.clone(),
                    balances: Vec::new(),
                    total: Decimal::ZERO,
                },
            };

            let mut total = Decimal::ZERO;
            let balances = investments
                .iter()
                .map(|inv| {
                    let mut value = balance_as_of(inv, cutoff);
                    // The most recent month shows the manual valuation
                    // when one exists, replacing the walked-forward value
                    // for that investment in that month only.
                    if is_last {
                        if let Some(current) = inv.investment.current_value {
                            value = current.max(Decimal::ZERO);
                        }
                    }
                    total += value;
                    InvestmentMonthBalance {
                        name: inv.investment.name.clone(),
                        balance: value,
                    }
                })
                .collect();

            let month = if is_last {
                final_month_label(investments, &last_key)
            } else {
                key.clone()
            };

            InvestmentTrendPoint {
                month,
                balances,
                total,
            }
        })
        .collect()
}

/// Derives the trailing-twelve-month aggregate for a tenant.
///
/// `now` anchors the month window; callers pass `Utc::now()` outside of
/// tests. Cashflow months must be ascending by month key, movements
/// ascending by date (repository order).
pub fn aggregate_months(
    investments: &[InvestmentWithMovements],
    liabilities: &[Liability],
    rentals: &[Rental],
    cashflow_months: &[CashflowMonth],
    other_incomes: &[OtherIncome],
    now: DateTime<Utc>,
) -> MonthlyAggregate {
    let months = trailing_month_keys(now, TREND_MONTHS);
    let withdrawals = withdrawals_by_month(investments);
    let other_income_monthly = monthly_equivalent_total(other_incomes);

    let rent_income: Decimal = rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Rented)
        .map(|r| r.monthly_rent)
        .sum();
    let declared_investment_income: Decimal = investments
        .iter()
        .filter_map(|i| i.investment.monthly_income)
        .sum();
    let liability_payments: Decimal = liabilities.iter().map(|l| l.monthly_payment).sum();

    // Constant parts of the derived estimate; only withdrawals vary by month.
    let base_income = rent_income + declared_investment_income + other_income_monthly;

    let month_withdrawals =
        |key: &str| withdrawals.get(key).copied().unwrap_or(Decimal::ZERO);

    let cashflow = if cashflow_months.is_empty() {
        let derived = months
            .iter()
            .map(|key| {
                let income = base_income + month_withdrawals(key);
                MonthlyCashflow {
                    month: key.clone(),
                    income,
                    expenses: liability_payments,
                    net: income - liability_payments,
                }
            })
            .collect();
        CashflowSeries::Derived(derived)
    } else {
        // Authoritative rows are the truth for their months; months with
        // no row stay absent rather than being zero-filled.
        let start = cashflow_months.len().saturating_sub(TREND_MONTHS);
        let authoritative = cashflow_months[start..]
            .iter()
            .map(|row| {
                let income = row.income + month_withdrawals(&row.month) + other_income_monthly;
                MonthlyCashflow {
                    month: row.month.clone(),
                    income,
                    expenses: row.expenses,
                    net: income - row.expenses,
                }
            })
            .collect();
        CashflowSeries::Authoritative(authoritative)
    };

    // KPI month: the newest authoritative row, else the derived estimate
    // for the current month.
    let (monthly_income, monthly_expenses) = match cashflow_months.last() {
        Some(last) => (
            last.income + month_withdrawals(&last.month) + other_income_monthly,
            last.expenses,
        ),
        None => {
            let current_key = month_key(now.date_naive());
            (base_income + month_withdrawals(&current_key), liability_payments)
        }
    };

    MonthlyAggregate {
        investment_trend: investment_trend(investments, &months),
        cashflow,
        monthly_income,
        monthly_expenses,
        monthly_net: monthly_income - monthly_expenses,
        other_income_monthly,
    }
}
