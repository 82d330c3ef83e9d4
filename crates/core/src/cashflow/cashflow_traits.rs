//! Cashflow month repository and service traits.

use async_trait::async_trait;

use super::cashflow_model::{CashflowMonth, CashflowMonthUpsert};
use crate::errors::Result;

/// Trait defining the contract for CashflowMonth repository operations.
#[async_trait]
pub trait CashflowRepositoryTrait: Send + Sync {
    /// Inserts or updates the row identified by `(tenant, month)`.
    async fn upsert(&self, row: CashflowMonthUpsert) -> Result<CashflowMonth>;

    /// Deletes a cashflow month by its ID. Returns the number of deleted records.
    async fn delete(&self, cashflow_month_id: &str) -> Result<usize>;

    /// Lists all cashflow months for a tenant, months ascending.
    fn list(&self, tenant_id: &str) -> Result<Vec<CashflowMonth>>;
}

/// Trait defining the contract for CashflowMonth service operations.
#[async_trait]
pub trait CashflowServiceTrait: Send + Sync {
    /// Lists cashflow months for a tenant, months ascending.
    fn list_months(&self, tenant_id: &str) -> Result<Vec<CashflowMonth>>;

    /// Upserts a month of actuals.
    async fn upsert_month(&self, row: CashflowMonthUpsert) -> Result<CashflowMonth>;

    /// Deletes a month of actuals.
    async fn delete_month(&self, cashflow_month_id: &str) -> Result<()>;
}
