//! Investment repository and service traits.
//!
//! These traits define the contract for investment operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::investments_model::{
    Investment, InvestmentUpdate, InvestmentWithMovements, Movement, MovementUpdate,
    NewInvestment, NewMovement,
};
use crate::errors::Result;

/// Trait defining the contract for Investment repository operations.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Creates a new investment.
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Updates an existing investment.
    async fn update(&self, update: InvestmentUpdate) -> Result<Investment>;

    /// Deletes an investment and its movements. Returns the number of
    /// deleted investment records.
    async fn delete(&self, investment_id: &str) -> Result<usize>;

    /// Retrieves an investment by its ID.
    fn get_by_id(&self, investment_id: &str) -> Result<Investment>;

    /// Finds an investment by its tenant-scoped natural key.
    fn find_by_name(&self, tenant_id: &str, name: &str) -> Result<Option<Investment>>;

    /// Lists all investments for a tenant.
    fn list(&self, tenant_id: &str) -> Result<Vec<Investment>>;

    /// Lists all investments for a tenant with their movement logs,
    /// movements ascending by effective date.
    fn list_with_movements(&self, tenant_id: &str) -> Result<Vec<InvestmentWithMovements>>;

    /// Retrieves a single investment with its movement log.
    fn get_with_movements(&self, investment_id: &str) -> Result<InvestmentWithMovements>;

    /// Appends a movement to an investment's log.
    async fn add_movement(&self, new_movement: NewMovement) -> Result<Movement>;

    /// Retrieves a movement by its ID.
    fn get_movement(&self, movement_id: &str) -> Result<Movement>;

    /// Applies a correction to a movement.
    async fn update_movement(&self, update: MovementUpdate) -> Result<Movement>;

    /// Deletes a movement. Returns the number of deleted records.
    async fn delete_movement(&self, movement_id: &str) -> Result<usize>;

    /// Sets the opening capital and opening date.
    async fn set_opening(
        &self,
        investment_id: &str,
        capital_invested: Decimal,
        opened_at: DateTime<Utc>,
    ) -> Result<Investment>;

    /// Atomically sets the manual current value and records the matching
    /// valuation-adjustment movement in the same transaction, so the
    /// movement log and the cached value never diverge.
    async fn set_current_value(
        &self,
        investment_id: &str,
        current_value: Decimal,
        as_of: DateTime<Utc>,
        adjustment: NewMovement,
    ) -> Result<Investment>;
}

/// Trait defining the contract for Investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    /// Lists investments for a tenant.
    fn list_investments(&self, tenant_id: &str) -> Result<Vec<Investment>>;

    /// Lists investments with their movement logs.
    fn list_investments_with_movements(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<InvestmentWithMovements>>;

    /// Retrieves a single investment with its movement log.
    fn get_investment(&self, investment_id: &str) -> Result<InvestmentWithMovements>;

    /// Creates a new investment with business validation.
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;

    /// Updates an existing investment with business validation.
    async fn update_investment(&self, update: InvestmentUpdate) -> Result<Investment>;

    /// Deletes an investment and its movement log.
    async fn delete_investment(&self, investment_id: &str) -> Result<()>;

    /// Records a movement against an investment.
    async fn add_movement(&self, new_movement: NewMovement) -> Result<Movement>;

    /// Corrects an existing movement.
    async fn update_movement(&self, update: MovementUpdate) -> Result<Movement>;

    /// Deletes a movement from the log.
    async fn delete_movement(&self, movement_id: &str) -> Result<()>;

    /// Updates the opening capital and opening date.
    async fn update_opening(
        &self,
        investment_id: &str,
        capital_invested: Decimal,
        opened_at: DateTime<Utc>,
    ) -> Result<Investment>;

    /// Updates the manual current value, recording a valuation-adjustment
    /// movement for the delta versus the reconstructed balance.
    async fn update_current_value(
        &self,
        investment_id: &str,
        current_value: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<Investment>;
}
