use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use hearth_core::errors::{DatabaseError, Error};
use hearth_core::liabilities::{
    Liability, LiabilityRepositoryTrait, LiabilityUpdate, NewLiability,
};
use hearth_core::Result;

use super::model::{LiabilityDB, NewLiabilityDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::liabilities::model::LiabilityUpdateDB;
use crate::schema::liabilities;

pub struct LiabilityRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl LiabilityRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        LiabilityRepository { pool, writer }
    }
}

#[async_trait]
impl LiabilityRepositoryTrait for LiabilityRepository {
    async fn create(&self, new_liability: NewLiability) -> Result<Liability> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Liability> {
                let mut new_db: NewLiabilityDB = new_liability.into();
                new_db.id = Some(
                    new_db
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                );

                let result_db = diesel::insert_into(liabilities::table)
                    .values(&new_db)
                    .returning(LiabilityDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Liability::from(result_db))
            })
            .await
    }

    async fn update(&self, update: LiabilityUpdate) -> Result<Liability> {
        let liability_id = update.id.clone().ok_or_else(|| {
            Error::Database(DatabaseError::QueryFailed(
                "Liability ID is required for updates".to_string(),
            ))
        })?;
        let changeset: LiabilityUpdateDB = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Liability> {
                diesel::update(liabilities::table.find(&liability_id))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = liabilities::table
                    .find(&liability_id)
                    .first::<LiabilityDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Liability::from(result_db))
            })
            .await
    }

    async fn delete(&self, liability_id: &str) -> Result<usize> {
        let owned_id = liability_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(liabilities::table.find(owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn get_by_id(&self, liability_id: &str) -> Result<Liability> {
        let mut conn = get_connection(&self.pool)?;
        let db = liabilities::table
            .find(liability_id)
            .first::<LiabilityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Liability::from(db))
    }

    fn find_by_name(&self, tenant_id: &str, name: &str) -> Result<Option<Liability>> {
        let mut conn = get_connection(&self.pool)?;
        let db = liabilities::table
            .filter(liabilities::tenant_id.eq(tenant_id))
            .filter(liabilities::name.eq(name))
            .first::<LiabilityDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(db.map(Liability::from))
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<Liability>> {
        let mut conn = get_connection(&self.pool)?;
        let dbs = liabilities::table
            .filter(liabilities::tenant_id.eq(tenant_id))
            .order(liabilities::name.asc())
            .load::<LiabilityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dbs.into_iter().map(Liability::from).collect())
    }
}
