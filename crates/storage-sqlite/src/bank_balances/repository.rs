use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use hearth_core::bank_balances::{BankBalance, BankBalanceRepositoryTrait, BankBalanceUpsert};
use hearth_core::Result;

use super::model::BankBalanceDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::bank_balances;

pub struct BankBalanceRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl BankBalanceRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        BankBalanceRepository { pool, writer }
    }
}

#[async_trait]
impl BankBalanceRepositoryTrait for BankBalanceRepository {
    async fn upsert(&self, row: BankBalanceUpsert) -> Result<BankBalance> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BankBalance> {
                let new_db: BankBalanceDB = row.into();
                diesel::insert_into(bank_balances::table)
                    .values(&new_db)
                    .on_conflict((bank_balances::tenant_id, bank_balances::date))
                    .do_update()
                    .set((
                        bank_balances::balance.eq(&new_db.balance),
                        bank_balances::updated_at.eq(&new_db.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = bank_balances::table
                    .filter(bank_balances::tenant_id.eq(&new_db.tenant_id))
                    .filter(bank_balances::date.eq(&new_db.date))
                    .first::<BankBalanceDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(BankBalance::from(result_db))
            })
            .await
    }

    async fn delete(&self, bank_balance_id: &str) -> Result<usize> {
        let owned_id = bank_balance_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(bank_balances::table.find(owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<BankBalance>> {
        let mut conn = get_connection(&self.pool)?;
        let dbs = bank_balances::table
            .filter(bank_balances::tenant_id.eq(tenant_id))
            .order(bank_balances::date.asc())
            .load::<BankBalanceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dbs.into_iter().map(BankBalance::from).collect())
    }
}
