//! SQLite storage implementation for liabilities.

mod model;
mod repository;

pub use model::{LiabilityDB, NewLiabilityDB};
pub use repository::LiabilityRepository;
