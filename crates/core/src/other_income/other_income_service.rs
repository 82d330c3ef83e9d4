use std::sync::Arc;

use super::other_income_model::{NewOtherIncome, OtherIncome, OtherIncomeUpdate};
use super::other_income_traits::{OtherIncomeRepositoryTrait, OtherIncomeServiceTrait};
use crate::errors::Result;

/// Service for managing recurring income entries.
pub struct OtherIncomeService {
    repository: Arc<dyn OtherIncomeRepositoryTrait>,
}

impl OtherIncomeService {
    /// Creates a new OtherIncomeService instance.
    pub fn new(repository: Arc<dyn OtherIncomeRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl OtherIncomeServiceTrait for OtherIncomeService {
    fn list_other_incomes(&self, tenant_id: &str) -> Result<Vec<OtherIncome>> {
        self.repository.list(tenant_id)
    }

    async fn create_other_income(&self, new_income: NewOtherIncome) -> Result<OtherIncome> {
        new_income.validate()?;
        self.repository.create(new_income).await
    }

    async fn update_other_income(&self, update: OtherIncomeUpdate) -> Result<OtherIncome> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_other_income(&self, income_id: &str) -> Result<()> {
        self.repository.delete(income_id).await?;
        Ok(())
    }
}
