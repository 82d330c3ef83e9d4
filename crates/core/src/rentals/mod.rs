//! Rentals module - domain models, services, and traits.

mod rentals_model;
mod rentals_service;
mod rentals_traits;

// Re-export the public interface
pub use rentals_model::{NewRental, Rental, RentalStatus, RentalUpdate};
pub use rentals_service::RentalService;
pub use rentals_traits::{RentalRepositoryTrait, RentalServiceTrait};
