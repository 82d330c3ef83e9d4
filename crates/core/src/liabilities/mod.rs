//! Liabilities module - domain models, services, and traits.

mod liabilities_model;
mod liabilities_service;
mod liabilities_traits;

// Re-export the public interface
pub use liabilities_model::{Liability, LiabilityCategory, LiabilityUpdate, NewLiability};
pub use liabilities_service::LiabilityService;
pub use liabilities_traits::{LiabilityRepositoryTrait, LiabilityServiceTrait};
