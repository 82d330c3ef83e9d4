//! Bank balances module - a logged series of dated balance snapshots.

mod bank_balances_model;
mod bank_balances_service;
mod bank_balances_traits;

// Re-export the public interface
pub use bank_balances_model::{BankBalance, BankBalanceUpsert};
pub use bank_balances_service::BankBalanceService;
pub use bank_balances_traits::{BankBalanceRepositoryTrait, BankBalanceServiceTrait};
