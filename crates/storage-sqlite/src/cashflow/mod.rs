//! SQLite storage implementation for cashflow months.

mod model;
mod repository;

pub use model::CashflowMonthDB;
pub use repository::CashflowRepository;
