//! Rental repository and service traits.

use async_trait::async_trait;

use super::rentals_model::{NewRental, Rental, RentalUpdate};
use crate::errors::Result;

/// Trait defining the contract for Rental repository operations.
#[async_trait]
pub trait RentalRepositoryTrait: Send + Sync {
    /// Creates a new rental.
    async fn create(&self, new_rental: NewRental) -> Result<Rental>;

    /// Updates an existing rental.
    async fn update(&self, update: RentalUpdate) -> Result<Rental>;

    /// Deletes a rental by its ID. Returns the number of deleted records.
    async fn delete(&self, rental_id: &str) -> Result<usize>;

    /// Retrieves a rental by its ID.
    fn get_by_id(&self, rental_id: &str) -> Result<Rental>;

    /// Finds a rental by its tenant-scoped natural key.
    fn find_by_property_name(&self, tenant_id: &str, property_name: &str)
        -> Result<Option<Rental>>;

    /// Lists all rentals for a tenant.
    fn list(&self, tenant_id: &str) -> Result<Vec<Rental>>;
}

/// Trait defining the contract for Rental service operations.
#[async_trait]
pub trait RentalServiceTrait: Send + Sync {
    /// Lists rentals for a tenant.
    fn list_rentals(&self, tenant_id: &str) -> Result<Vec<Rental>>;

    /// Creates a new rental with business validation.
    async fn create_rental(&self, new_rental: NewRental) -> Result<Rental>;

    /// Updates a rental with business validation.
    async fn update_rental(&self, update: RentalUpdate) -> Result<Rental>;

    /// Deletes a rental.
    async fn delete_rental(&self, rental_id: &str) -> Result<()>;
}
