use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use hearth_core::errors::{DatabaseError, Error};
use hearth_core::rentals::{NewRental, Rental, RentalRepositoryTrait, RentalUpdate};
use hearth_core::Result;

use super::model::{NewRentalDB, RentalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::rentals::model::RentalUpdateDB;
use crate::schema::rentals;

pub struct RentalRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl RentalRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        RentalRepository { pool, writer }
    }
}

#[async_trait]
impl RentalRepositoryTrait for RentalRepository {
    async fn create(&self, new_rental: NewRental) -> Result<Rental> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Rental> {
                let mut new_db: NewRentalDB = new_rental.into();
                new_db.id = Some(
                    new_db
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                );

                let result_db = diesel::insert_into(rentals::table)
                    .values(&new_db)
                    .returning(RentalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Rental::from(result_db))
            })
            .await
    }

    async fn update(&self, update: RentalUpdate) -> Result<Rental> {
        let rental_id = update.id.clone().ok_or_else(|| {
            Error::Database(DatabaseError::QueryFailed(
                "Rental ID is required for updates".to_string(),
            ))
        })?;
        let changeset: RentalUpdateDB = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Rental> {
                diesel::update(rentals::table.find(&rental_id))
                    .set(&changeset)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = rentals::table
                    .find(&rental_id)
                    .first::<RentalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Rental::from(result_db))
            })
            .await
    }

    async fn delete(&self, rental_id: &str) -> Result<usize> {
        let owned_id = rental_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(rentals::table.find(owned_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn get_by_id(&self, rental_id: &str) -> Result<Rental> {
        let mut conn = get_connection(&self.pool)?;
        let db = rentals::table
            .find(rental_id)
            .first::<RentalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Rental::from(db))
    }

    fn find_by_property_name(
        &self,
        tenant_id: &str,
        property_name: &str,
    ) -> Result<Option<Rental>> {
        let mut conn = get_connection(&self.pool)?;
        let db = rentals::table
            .filter(rentals::tenant_id.eq(tenant_id))
            .filter(rentals::property_name.eq(property_name))
            .first::<RentalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(db.map(Rental::from))
    }

    fn list(&self, tenant_id: &str) -> Result<Vec<Rental>> {
        let mut conn = get_connection(&self.pool)?;
        let dbs = rentals::table
            .filter(rentals::tenant_id.eq(tenant_id))
            .order(rentals::property_name.asc())
            .load::<RentalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dbs.into_iter().map(Rental::from).collect())
    }
}
