//! Investments module - domain models, services, and traits.

mod investments_model;
mod investments_service;
mod investments_traits;

#[cfg(test)]
mod investments_model_tests;

// Re-export the public interface
pub use investments_model::{
    Investment, InvestmentCategory, InvestmentUpdate, InvestmentWithMovements, Movement,
    MovementKind, MovementUpdate, NewInvestment, NewMovement,
};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
