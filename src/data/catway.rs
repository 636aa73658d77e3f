//! Catway data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::catway::{Catway, CreateCatwayParam};

/// Repository providing database operations for catway management.
pub struct CatwayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatwayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new catway.
    ///
    /// # Arguments
    /// - `param` - Catway creation parameters
    ///
    /// # Returns
    /// - `Ok(Catway)` - The created catway
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCatwayParam) -> Result<Catway, DbErr> {
        let now = Utc::now();
        let entity = entity::catway::ActiveModel {
            catway_number: ActiveValue::Set(param.catway_number),
            catway_type: ActiveValue::Set(param.catway_type),
            catway_state: ActiveValue::Set(param.catway_state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Catway::from_entity(entity))
    }

    /// Finds a catway by its business number (not the row id).
    pub async fn find_by_number(&self, catway_number: i32) -> Result<Option<Catway>, DbErr> {
        let entity = entity::prelude::Catway::find()
            .filter(entity::catway::Column::CatwayNumber.eq(catway_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Catway::from_entity))
    }

    /// Gets all catways ordered by catway number.
    pub async fn get_all(&self) -> Result<Vec<Catway>, DbErr> {
        let entities = entity::prelude::Catway::find()
            .order_by_asc(entity::catway::Column::CatwayNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Catway::from_entity).collect())
    }

    /// Updates the state of a catway.
    ///
    /// The state is the only mutable column; number and type are fixed at
    /// creation.
    ///
    /// # Arguments
    /// - `catway_number` - Business number of the catway to update
    /// - `catway_state` - New free-text state
    ///
    /// # Returns
    /// - `Ok(Some(Catway))` - The updated catway
    /// - `Ok(None)` - No catway with that number
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_state(
        &self,
        catway_number: i32,
        catway_state: String,
    ) -> Result<Option<Catway>, DbErr> {
        let Some(model) = entity::prelude::Catway::find()
            .filter(entity::catway::Column::CatwayNumber.eq(catway_number))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::catway::ActiveModel = model.into();
        active.catway_state = ActiveValue::Set(catway_state);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Catway::from_entity(updated)))
    }

    /// Deletes the catway with the given number.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows removed (0 when the number was unknown)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_number(&self, catway_number: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Catway::delete_many()
            .filter(entity::catway::Column::CatwayNumber.eq(catway_number))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
