use std::sync::Arc;

use super::liabilities_model::{Liability, LiabilityUpdate, NewLiability};
use super::liabilities_traits::{LiabilityRepositoryTrait, LiabilityServiceTrait};
use crate::errors::Result;
use crate::utils::normalize_fraction;

/// Service for managing liabilities.
pub struct LiabilityService {
    repository: Arc<dyn LiabilityRepositoryTrait>,
}

impl LiabilityService {
    /// Creates a new LiabilityService instance.
    pub fn new(repository: Arc<dyn LiabilityRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl LiabilityServiceTrait for LiabilityService {
    fn list_liabilities(&self, tenant_id: &str) -> Result<Vec<Liability>> {
        self.repository.list(tenant_id)
    }

    async fn create_liability(&self, mut new_liability: NewLiability) -> Result<Liability> {
        new_liability.validate()?;
        new_liability.interest_rate = new_liability.interest_rate.map(normalize_fraction);
        self.repository.create(new_liability).await
    }

    async fn update_liability(&self, mut update: LiabilityUpdate) -> Result<Liability> {
        update.validate()?;
        update.interest_rate = update.interest_rate.map(normalize_fraction);
        self.repository.update(update).await
    }

    async fn delete_liability(&self, liability_id: &str) -> Result<()> {
        self.repository.delete(liability_id).await?;
        Ok(())
    }
}
