use std::sync::Arc;

use super::rentals_model::{NewRental, Rental, RentalUpdate};
use super::rentals_traits::{RentalRepositoryTrait, RentalServiceTrait};
use crate::errors::Result;

/// Service for managing rental properties.
pub struct RentalService {
    repository: Arc<dyn RentalRepositoryTrait>,
}

impl RentalService {
    /// Creates a new RentalService instance.
    pub fn new(repository: Arc<dyn RentalRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl RentalServiceTrait for RentalService {
    fn list_rentals(&self, tenant_id: &str) -> Result<Vec<Rental>> {
        self.repository.list(tenant_id)
    }

    async fn create_rental(&self, new_rental: NewRental) -> Result<Rental> {
        new_rental.validate()?;
        self.repository.create(new_rental).await
    }

    async fn update_rental(&self, update: RentalUpdate) -> Result<Rental> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_rental(&self, rental_id: &str) -> Result<()> {
        self.repository.delete(rental_id).await?;
        Ok(())
    }
}
