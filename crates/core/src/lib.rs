//! Hearth Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Hearth, a family
//! finance overview service. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate.

pub mod bank_balances;
pub mod cashflow;
pub mod constants;
pub mod errors;
pub mod imports;
pub mod investments;
pub mod liabilities;
pub mod other_income;
pub mod overview;
pub mod rentals;
pub mod utils;

// Re-export common types from the overview engine
pub use overview::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
