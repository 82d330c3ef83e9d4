//! Cashflow months module - authoritative monthly actuals.

mod cashflow_model;
mod cashflow_service;
mod cashflow_traits;

// Re-export the public interface
pub use cashflow_model::{CashflowMonth, CashflowMonthUpsert};
pub use cashflow_service::CashflowService;
pub use cashflow_traits::{CashflowRepositoryTrait, CashflowServiceTrait};
