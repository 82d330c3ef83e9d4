//! Liability repository and service traits.

use async_trait::async_trait;

use super::liabilities_model::{Liability, LiabilityUpdate, NewLiability};
use crate::errors::Result;

/// Trait defining the contract for Liability repository operations.
#[async_trait]
pub trait LiabilityRepositoryTrait: Send + Sync {
    /// Creates a new liability.
    async fn create(&self, new_liability: NewLiability) -> Result<Liability>;

    /// Updates an existing liability.
    async fn update(&self, update: LiabilityUpdate) -> Result<Liability>;

    /// Deletes a liability by its ID. Returns the number of deleted records.
    async fn delete(&self, liability_id: &str) -> Result<usize>;

    /// Retrieves a liability by its ID.
    fn get_by_id(&self, liability_id: &str) -> Result<Liability>;

    /// Finds a liability by its tenant-scoped natural key.
    fn find_by_name(&self, tenant_id: &str, name: &str) -> Result<Option<Liability>>;

    /// Lists all liabilities for a tenant.
    fn list(&self, tenant_id: &str) -> Result<Vec<Liability>>;
}

/// Trait defining the contract for Liability service operations.
#[async_trait]
pub trait LiabilityServiceTrait: Send + Sync {
    /// Lists liabilities for a tenant.
    fn list_liabilities(&self, tenant_id: &str) -> Result<Vec<Liability>>;

    /// Creates a new liability, normalizing percentage-form interest rates.
    async fn create_liability(&self, new_liability: NewLiability) -> Result<Liability>;

    /// Updates a liability, normalizing percentage-form interest rates.
    async fn update_liability(&self, update: LiabilityUpdate) -> Result<Liability>;

    /// Deletes a liability.
    async fn delete_liability(&self, liability_id: &str) -> Result<()>;
}
