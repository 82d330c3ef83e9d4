//! SQLite storage implementation for investments and their movements.

mod model;
mod repository;

pub use model::{InvestmentDB, MovementDB, NewInvestmentDB, NewMovementDB};
pub use repository::InvestmentRepository;
