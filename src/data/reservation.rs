//! Reservation data repository for database operations.
//!
//! Home of the conflict detector query: `find_overlapping` is the SQL
//! translation of the half-open interval predicate, scanning existing
//! reservations on one catway for any that overlap a proposed interval.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::reservation::{CreateReservationParam, Reservation, UpdateReservationParam};

/// Repository providing database operations for reservation management.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new reservation.
    ///
    /// The caller is responsible for having run the conflict check first;
    /// check and insert are not one atomic step (see `find_overlapping`).
    ///
    /// # Arguments
    /// - `param` - Reservation creation parameters
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with generated id and timestamps
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, DbErr> {
        let now = Utc::now();
        let entity = entity::reservation::ActiveModel {
            catway_number: ActiveValue::Set(param.catway_number),
            client_name: ActiveValue::Set(param.client_name),
            boat_name: ActiveValue::Set(param.boat_name),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Finds a reservation by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Gets all reservations ordered by start date.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets all reservations for one catway ordered by start date.
    pub async fn get_for_catway(&self, catway_number: i32) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CatwayNumber.eq(catway_number))
            .order_by_asc(entity::reservation::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets reservations whose half-open interval contains the given instant.
    ///
    /// # Arguments
    /// - `now` - The instant to test, normally `Utc::now()`
    pub async fn get_current(&self, now: DateTime<Utc>) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StartDate.lte(now))
            .filter(entity::reservation::Column::EndDate.gt(now))
            .order_by_asc(entity::reservation::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Finds any existing reservation on the catway that overlaps the
    /// proposed half-open interval `[start_date, end_date)`.
    ///
    /// Two intervals overlap iff `existing.start < proposed.end` and
    /// `existing.end > proposed.start`; intervals that merely touch at a
    /// boundary do not conflict. When `exclude_id` is supplied (update path)
    /// that reservation is ignored so a record never conflicts with itself.
    ///
    /// This read and the subsequent insert are not wrapped in a transaction;
    /// two concurrent creates for the same interval can both pass the check.
    /// Accepted limitation.
    ///
    /// # Arguments
    /// - `catway_number` - Catway whose reservations are scanned
    /// - `start_date` - Proposed interval start (inclusive)
    /// - `end_date` - Proposed interval end (exclusive)
    /// - `exclude_id` - Reservation id to skip, if updating
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - A conflicting reservation exists
    /// - `Ok(None)` - The interval is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_overlapping(
        &self,
        catway_number: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        exclude_id: Option<i32>,
    ) -> Result<Option<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CatwayNumber.eq(catway_number))
            .filter(entity::reservation::Column::StartDate.lt(end_date))
            .filter(entity::reservation::Column::EndDate.gt(start_date));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        let entity = query.one(self.db).await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Counts reservations referencing the given catway number.
    ///
    /// Used to refuse catway deletion while bookings still point at it.
    pub async fn count_for_catway(&self, catway_number: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CatwayNumber.eq(catway_number))
            .count(self.db)
            .await
    }

    /// Applies a partial update to the reservation with the given id.
    ///
    /// Only fields present in `param` are written. The catway number is not
    /// updatable; a reservation stays on the catway it was created for.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - The updated reservation
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateReservationParam,
    ) -> Result<Option<Reservation>, DbErr> {
        let Some(model) = entity::prelude::Reservation::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::reservation::ActiveModel = model.into();

        if let Some(client_name) = param.client_name {
            active.client_name = ActiveValue::Set(client_name);
        }
        if let Some(boat_name) = param.boat_name {
            active.boat_name = ActiveValue::Set(boat_name);
        }
        if let Some(start_date) = param.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = param.end_date {
            active.end_date = ActiveValue::Set(end_date);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(updated)))
    }

    /// Deletes the reservation with the given id.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows removed (0 when the id was unknown)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
