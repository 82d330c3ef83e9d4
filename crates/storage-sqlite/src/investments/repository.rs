use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use hearth_core::errors::{DatabaseError, Error};
use hearth_core::investments::{
    Investment, InvestmentRepositoryTrait, InvestmentUpdate, InvestmentWithMovements, Movement,
    MovementUpdate, NewInvestment, NewMovement,
};
use hearth_core::Result;
use rust_decimal::Decimal;

use super::model::{
    InvestmentDB, InvestmentUpdateDB, MovementDB, NewInvestmentDB, NewMovementDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{investment_movements, investments};
use crate::utils::format_datetime;

pub struct InvestmentRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        InvestmentRepository { pool, writer }
    }

    fn load_movements_for(
        conn: &mut SqliteConnection,
        parents: &[InvestmentDB],
    ) -> Result<Vec<Vec<MovementDB>>> {
        let movements = MovementDB::belonging_to(parents)
            .order(investment_movements::effective_at.asc())
            .load::<MovementDB>(conn)
            .map_err(StorageError::from)?;
        Ok(movements.grouped_by(parents))
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn create(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                let mut new_db: NewInvestmentDB = new_investment.into();
                new_db.id = Some(
                    new_db
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                );

                let result_db = diesel::insert_into(investments::table)
                    .values(&new_db)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn update(&self, update: InvestmentUpdate) -> Result<Investment> {
        let investment_id = update.id.clone().ok_or_else(|| {
            Error::Database(DatabaseError::QueryFailed(
                "Investment ID is required for updates".to_string(),
            ))
        })?;
        let changeset: InvestmentUpdateDB = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(investments::table.find(&investment_id))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = investments::table
                    .find(&investment_id)
                    .first::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    async fn delete(&self, investment_id: &str) -> Result<usize> {
        let owned_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    investment_movements::table
                        .filter(investment_movements::investment_id.eq(&owned_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(diesel::delete(investments::table.find(&owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        let db = investments::table
            .find(investment_id)
            .first::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Investment::from(db))
    }

    fn find_by_name(&self, tenant_id: &str, name: &str) -> Result<Option<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let db = investments::table
            .filter(investments::tenant_id.eq(tenant_id))
            .filter(investments::name.eq(name))
            .first::<InvestmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(db.map(Investment::from))
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        let dbs = investments::table
            .filter(investments::tenant_id.eq(tenant_id))
            .order(investments::name.asc())
            .load::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dbs.into_iter().map(Investment::from).collect())
    }

    fn list_with_movements(&self, tenant_id: &str) -> Result<Vec<InvestmentWithMovements>> {
        let mut conn = get_connection(&self.pool)?;
        let parents = investments::table
            .filter(investments::tenant_id.eq(tenant_id))
            .order(investments::name.asc())
            .load::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        let grouped = Self::load_movements_for(&mut conn, &parents)?;

        Ok(parents
            .into_iter()
            .zip(grouped)
            .map(|(parent, movements)| InvestmentWithMovements {
                investment: Investment::from(parent),
                movements: movements.into_iter().map(Movement::from).collect(),
            })
            .collect())
    }

    fn get_with_movements(&self, investment_id: &str) -> Result<InvestmentWithMovements> {
        let mut conn = get_connection(&self.pool)?;
        let parent = investments::table
            .find(investment_id)
            .first::<InvestmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        let movements = investment_movements::table
            .filter(investment_movements::investment_id.eq(investment_id))
            .order(investment_movements::effective_at.asc())
            .load::<MovementDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(InvestmentWithMovements {
            investment: Investment::from(parent),
            movements: movements.into_iter().map(Movement::from).collect(),
        })
    }

    async fn add_movement(&self, new_movement: NewMovement) -> Result<Movement> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Movement> {
                let new_db: NewMovementDB = new_movement.into();
                let result_db = diesel::insert_into(investment_movements::table)
                    .values(&new_db)
                    .returning(MovementDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Movement::from(result_db))
            })
            .await
    }

    fn get_movement(&self, movement_id: &str) -> Result<Movement> {
        let mut conn = get_connection(&self.pool)?;
        let db = investment_movements::table
            .find(movement_id)
            .first::<MovementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Movement::from(db))
    }

    async fn update_movement(&self, update: MovementUpdate) -> Result<Movement> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Movement> {
                let mut db = investment_movements::table
                    .find(&update.id)
                    .first::<MovementDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(kind) = update.kind {
                    db.kind = kind.as_str().to_string();
                }
                if let Some(amount) = update.amount {
                    db.amount = amount.to_string();
                }
                if let Some(effective_at) = update.effective_at {
                    db.effective_at = format_datetime(effective_at);
                }

                diesel::update(investment_movements::table.find(&db.id))
                    .set(&db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Movement::from(db))
            })
            .await
    }

    async fn delete_movement(&self, movement_id: &str) -> Result<usize> {
        let owned_id = movement_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(investment_movements::table.find(owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn set_opening(
        &self,
        investment_id: &str,
        capital_invested: Decimal,
        opened_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Investment> {
        let owned_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(investments::table.find(&owned_id))
                    .set((
                        investments::capital_invested.eq(capital_invested.to_string()),
                        investments::opened_at.eq(Some(format_datetime(opened_at))),
                        investments::updated_at.eq(format_datetime(chrono::Utc::now())),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = investments::table
                    .find(&owned_id)
                    .first::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }

    // The value update and its audit movement land in the same writer
    // job, so they share one immediate transaction.
    async fn set_current_value(
        &self,
        investment_id: &str,
        current_value: Decimal,
        as_of: chrono::DateTime<chrono::Utc>,
        adjustment: NewMovement,
    ) -> Result<Investment> {
        let owned_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(investments::table.find(&owned_id))
                    .set((
                        investments::current_value.eq(Some(current_value.to_string())),
                        investments::value_as_of.eq(Some(format_datetime(as_of))),
                        investments::updated_at.eq(format_datetime(chrono::Utc::now())),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let new_db: NewMovementDB = adjustment.into();
                diesel::insert_into(investment_movements::table)
                    .values(&new_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = investments::table
                    .find(&owned_id)
                    .first::<InvestmentDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Investment::from(result_db))
            })
            .await
    }
}
