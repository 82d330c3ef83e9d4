use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use hearth_core::cashflow::{CashflowMonth, CashflowMonthUpsert, CashflowRepositoryTrait};
use hearth_core::Result;

use super::model::CashflowMonthDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::cashflow_months;

pub struct CashflowRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl CashflowRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        CashflowRepository { pool, writer }
    }
}

#[async_trait]
impl CashflowRepositoryTrait for CashflowRepository {
    async fn upsert(&self, row: CashflowMonthUpsert) -> Result<CashflowMonth> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CashflowMonth> {
                let new_db: CashflowMonthDB = row.into();
                diesel::insert_into(cashflow_months::table)
                    .values(&new_db)
                    .on_conflict((cashflow_months::tenant_id, cashflow_months::month))
                    .do_update()
                    .set((
                        cashflow_months::income.eq(&new_db.income),
                        cashflow_months::expenses.eq(&new_db.expenses),
                        cashflow_months::updated_at.eq(&new_db.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = cashflow_months::table
                    .filter(cashflow_months::tenant_id.eq(&new_db.tenant_id))
                    .filter(cashflow_months::month.eq(&new_db.month))
                    .first::<CashflowMonthDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(CashflowMonth::from(result_db))
            })
            .await
    }

    async fn delete(&self, cashflow_month_id: &str) -> Result<usize> {
        let owned_id = cashflow_month_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(cashflow_months::table.find(owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<CashflowMonth>> {
        let mut conn = get_connection(&self.pool)?;
        let dbs = cashflow_months::table
            .filter(cashflow_months::tenant_id.eq(tenant_id))
            .order(cashflow_months::month.asc())
            .load::<CashflowMonthDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dbs.into_iter().map(CashflowMonth::from).collect())
    }
}
