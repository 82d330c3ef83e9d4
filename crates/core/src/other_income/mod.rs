//! Other income module - recurring income outside rentals and investments.

mod other_income_model;
mod other_income_service;
mod other_income_traits;

// Re-export the public interface
pub use other_income_model::{
    monthly_equivalent_total, IncomeFrequency, NewOtherIncome, OtherIncome, OtherIncomeType,
    OtherIncomeUpdate,
};
pub use other_income_service::OtherIncomeService;
pub use other_income_traits::{OtherIncomeRepositoryTrait, OtherIncomeServiceTrait};
