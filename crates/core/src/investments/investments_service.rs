use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::investments_model::{
    Investment, InvestmentUpdate, InvestmentWithMovements, Movement, MovementKind,
    MovementUpdate, NewInvestment, NewMovement,
};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::overview::balance::unclamped_running_value;
use crate::utils::normalize_fraction;
use crate::Error;

/// Service for managing investments and their movement logs.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance.
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn list_investments(&self, tenant_id: &str) -> Result<Vec<Investment>> {
        self.repository.list(tenant_id)
    }

    fn list_investments_with_movements(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<InvestmentWithMovements>> {
        self.repository.list_with_movements(tenant_id)
    }

    fn get_investment(&self, investment_id: &str) -> Result<InvestmentWithMovements> {
        self.repository.get_with_movements(investment_id)
    }

    async fn create_investment(&self, mut new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;
        new_investment.return_pct = new_investment.return_pct.map(normalize_fraction);
        self.repository.create(new_investment).await
    }

    async fn update_investment(&self, mut update: InvestmentUpdate) -> Result<Investment> {
        update.validate()?;
        update.return_pct = update.return_pct.map(normalize_fraction);
        self.repository.update(update).await
    }

    async fn delete_investment(&self, investment_id: &str) -> Result<()> {
        self.repository.delete(investment_id).await?;
        Ok(())
    }

    async fn add_movement(&self, new_movement: NewMovement) -> Result<Movement> {
        new_movement.validate()?;
        // The owning investment must still exist; a dangling movement
        // would corrupt every reconstruction.
        self.repository.get_by_id(&new_movement.investment_id)?;
        self.repository.add_movement(new_movement).await
    }

    async fn update_movement(&self, update: MovementUpdate) -> Result<Movement> {
        let existing = self.repository.get_movement(&update.id)?;
        update.validate(existing.kind)?;
        if update.is_empty() {
            return Ok(existing);
        }
        self.repository.update_movement(update).await
    }

    async fn delete_movement(&self, movement_id: &str) -> Result<()> {
        self.repository.delete_movement(movement_id).await?;
        Ok(())
    }

    async fn update_opening(
        &self,
        investment_id: &str,
        capital_invested: Decimal,
        opened_at: DateTime<Utc>,
    ) -> Result<Investment> {
        if capital_invested < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Opening capital must be zero or greater".to_string(),
            )));
        }
        self.repository
            .set_opening(investment_id, capital_invested, opened_at)
            .await
    }

    async fn update_current_value(
        &self,
        investment_id: &str,
        current_value: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<Investment> {
        let existing = self.repository.get_with_movements(investment_id)?;

        // The delta is measured against the true running arithmetic, not
        // the zero-clamped display balance, so repeated manual valuations
        // always leave the replayed log equal to the entered value.
        let prior = unclamped_running_value(&existing.investment, &existing.movements);
        let delta = current_value - prior;
        debug!(
            "Updating current value of {}: prior={}, entered={}, delta={}",
            investment_id, prior, current_value, delta
        );

        let adjustment = NewMovement {
            investment_id: investment_id.to_string(),
            kind: MovementKind::ValuationAdjustment,
            amount: delta,
            effective_at: as_of,
        };

        self.repository
            .set_current_value(investment_id, current_value, as_of, adjustment)
            .await
    }
}
