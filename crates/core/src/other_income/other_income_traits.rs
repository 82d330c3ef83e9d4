//! Other income repository and service traits.

use async_trait::async_trait;

use super::other_income_model::{NewOtherIncome, OtherIncome, OtherIncomeUpdate};
use crate::errors::Result;

/// Trait defining the contract for OtherIncome repository operations.
#[async_trait]
pub trait OtherIncomeRepositoryTrait: Send + Sync {
    /// Creates a new income entry.
    async fn create(&self, new_income: NewOtherIncome) -> Result<OtherIncome>;

    /// Updates an existing income entry.
    async fn update(&self, update: OtherIncomeUpdate) -> Result<OtherIncome>;

    /// Deletes an income entry by its ID. Returns the number of deleted records.
    async fn delete(&self, income_id: &str) -> Result<usize>;

    /// Retrieves an income entry by its ID.
    fn get_by_id(&self, income_id: &str) -> Result<OtherIncome>;

    /// Lists all income entries for a tenant.
    fn list(&self, tenant_id: &str) -> Result<Vec<OtherIncome>>;
}

/// Trait defining the contract for OtherIncome service operations.
#[async_trait]
pub trait OtherIncomeServiceTrait: Send + Sync {
    /// Lists income entries for a tenant.
    fn list_other_incomes(&self, tenant_id: &str) -> Result<Vec<OtherIncome>>;

    /// Creates a new income entry with business validation.
    async fn create_other_income(&self, new_income: NewOtherIncome) -> Result<OtherIncome>;

    /// Updates an income entry with business validation.
    async fn update_other_income(&self, update: OtherIncomeUpdate) -> Result<OtherIncome>;

    /// Deletes an income entry.
    async fn delete_other_income(&self, income_id: &str) -> Result<()>;
}
