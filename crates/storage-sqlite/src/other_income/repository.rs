use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use hearth_core::errors::{DatabaseError, Error};
use hearth_core::other_income::{
    NewOtherIncome, OtherIncome, OtherIncomeRepositoryTrait, OtherIncomeUpdate,
};
use hearth_core::Result;

use super::model::{NewOtherIncomeDB, OtherIncomeDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::other_income::model::OtherIncomeUpdateDB;
use crate::schema::other_incomes;

pub struct OtherIncomeRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl OtherIncomeRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        OtherIncomeRepository { pool, writer }
    }
}

#[async_trait]
impl OtherIncomeRepositoryTrait for OtherIncomeRepository {
    async fn create(&self, new_income: NewOtherIncome) -> Result<OtherIncome> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<OtherIncome> {
                let mut new_db: NewOtherIncomeDB = new_income.into();
                new_db.id = Some(
                    new_db
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                );

                let result_db = diesel::insert_into(other_incomes::table)
                    .values(&new_db)
                    .returning(OtherIncomeDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(OtherIncome::from(result_db))
            })
            .await
    }

    async fn update(&self, update: OtherIncomeUpdate) -> Result<OtherIncome> {
        let income_id = update.id.clone().ok_or_else(|| {
            Error::Database(DatabaseError::QueryFailed(
                "Income entry ID is required for updates".to_string(),
            ))
        })?;
        let changeset: OtherIncomeUpdateDB = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<OtherIncome> {
                diesel::update(other_incomes::table.find(&income_id))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = other_incomes::table
                    .find(&income_id)
                    .first::<OtherIncomeDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(OtherIncome::from(result_db))
            })
            .await
    }

    async fn delete(&self, income_id: &str) -> Result<usize> {
        let owned_id = income_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(other_incomes::table.find(owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn get_by_id(&self, income_id: &str) -> Result<OtherIncome> {
        let mut conn = get_connection(&self.pool)?;
        let db = other_incomes::table
            .find(income_id)
            .first::<OtherIncomeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(OtherIncome::from(db))
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<OtherIncome>> {
        let mut conn = get_connection(&self.pool)?;
        let dbs = other_incomes::table
            .filter(other_incomes::tenant_id.eq(tenant_id))
            .order(other_incomes::description.asc())
            .load::<OtherIncomeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dbs.into_iter().map(OtherIncome::from).collect())
    }
}
