//! SQLite storage implementation for bank balance snapshots.

mod model;
mod repository;

pub use model::BankBalanceDB;
pub use repository::BankBalanceRepository;
