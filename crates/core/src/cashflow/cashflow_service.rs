use std::sync::Arc;

use super::cashflow_model::{CashflowMonth, CashflowMonthUpsert};
use super::cashflow_traits::{CashflowRepositoryTrait, CashflowServiceTrait};
use crate::errors::Result;

/// Service for managing authoritative monthly actuals.
pub struct CashflowService {
    repository: Arc<dyn CashflowRepositoryTrait>,
}

impl CashflowService {
    /// Creates a new CashflowService instance.
    pub fn new(repository: Arc<dyn CashflowRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CashflowServiceTrait for CashflowService {
    fn list_months(&self, tenant_id: &str) -> Result<Vec<CashflowMonth>> {
        self.repository.list(tenant_id)
    }

    async fn upsert_month(&self, row: CashflowMonthUpsert) -> Result<CashflowMonth> {
        row.validate()?;
        self.repository.upsert(row).await
    }

    async fn delete_month(&self, cashflow_month_id: &str) -> Result<()> {
        self.repository.delete(cashflow_month_id).await?;
        Ok(())
    }
}
