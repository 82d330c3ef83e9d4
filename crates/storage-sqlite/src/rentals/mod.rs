//! SQLite storage implementation for rentals.

mod model;
mod repository;

pub use model::{NewRentalDB, RentalDB};
pub use repository::RentalRepository;
