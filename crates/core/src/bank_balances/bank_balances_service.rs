use std::sync::Arc;

use super::bank_balances_model::{BankBalance, BankBalanceUpsert};
use super::bank_balances_traits::{BankBalanceRepositoryTrait, BankBalanceServiceTrait};
use crate::errors::Result;

/// Service for managing the bank balance series.
pub struct BankBalanceService {
    repository: Arc<dyn BankBalanceRepositoryTrait>,
}

impl BankBalanceService {
    /// Creates a new BankBalanceService instance.
    pub fn new(repository: Arc<dyn BankBalanceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BankBalanceServiceTrait for BankBalanceService {
    fn list_balances(&self, tenant_id: &str) -> Result<Vec<BankBalance>> {
        self.repository.list(tenant_id)
    }

    async fn upsert_balance(&self, mut row: BankBalanceUpsert) -> Result<BankBalance> {
        row.validate()?;
        row.date = row.date_key();
        self.repository.upsert(row).await
    }

    async fn delete_balance(&self, bank_balance_id: &str) -> Result<()> {
        self.repository.delete(bank_balance_id).await?;
        Ok(())
    }
}
