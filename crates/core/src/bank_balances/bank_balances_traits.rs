//! Bank balance repository and service traits.

use async_trait::async_trait;

use super::bank_balances_model::{BankBalance, BankBalanceUpsert};
use crate::errors::Result;

/// Trait defining the contract for BankBalance repository operations.
#[async_trait]
pub trait BankBalanceRepositoryTrait: Send + Sync {
    /// Inserts or updates the snapshot identified by `(tenant, date)`.
    async fn upsert(&self, row: BankBalanceUpsert) -> Result<BankBalance>;

    /// Deletes a snapshot by its ID. Returns the number of deleted records.
    async fn delete(&self, bank_balance_id: &str) -> Result<usize>;

    /// Lists all snapshots for a tenant, dates ascending.
    fn list(&self, tenant_id: &str) -> Result<Vec<BankBalance>>;
}

/// Trait defining the contract for BankBalance service operations.
#[async_trait]
pub trait BankBalanceServiceTrait: Send + Sync {
    /// Lists snapshots for a tenant, dates ascending.
    fn list_balances(&self, tenant_id: &str) -> Result<Vec<BankBalance>>;

    /// Upserts a dated snapshot.
    async fn upsert_balance(&self, row: BankBalanceUpsert) -> Result<BankBalance>;

    /// Deletes a snapshot.
    async fn delete_balance(&self, bank_balance_id: &str) -> Result<()>;
}
