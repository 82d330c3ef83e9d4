//! Monthly aggregation across a tenant's entities.

mod aggregation_model;
mod aggregation_service;

#[cfg(test)]
mod aggregation_service_tests;

pub use aggregation_model::{
    CashflowSeries, InvestmentMonthBalance, InvestmentTrendPoint, MonthlyAggregate,
    MonthlyCashflow,
};
pub use aggregation_service::{aggregate_months, withdrawals_by_month};
