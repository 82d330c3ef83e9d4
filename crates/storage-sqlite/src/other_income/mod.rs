//! SQLite storage implementation for other income entries.

mod model;
mod repository;

pub use model::{NewOtherIncomeDB, OtherIncomeDB};
pub use repository::OtherIncomeRepository;
