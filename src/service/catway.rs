//! Catway service for dock infrastructure business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::{catway::CatwayRepository, reservation::ReservationRepository},
    error::AppError,
    model::catway::{Catway, CreateCatwayDto, CreateCatwayParam, UpdateCatwayDto},
    validate,
};

/// Service providing business logic for catway management.
pub struct CatwayService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatwayService<'a> {
    /// Creates a new CatwayService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new catway.
    ///
    /// # Arguments
    /// - `payload` - Catway creation request body
    ///
    /// # Returns
    /// - `Ok(Catway)` - The created catway
    /// - `Err(AppError::Validation)` - Unknown type token or blank state
    /// - `Err(AppError::Conflict)` - Catway number already in use
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, payload: CreateCatwayDto) -> Result<Catway, AppError> {
        validate::validate_catway_create(&payload).map_err(AppError::Validation)?;

        let catway_repo = CatwayRepository::new(self.db);

        if catway_repo
            .find_by_number(payload.catway_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Catway {} already exists",
                payload.catway_number
            )));
        }

        let catway = catway_repo
            .create(CreateCatwayParam {
                catway_number: payload.catway_number,
                catway_type: payload.catway_type,
                catway_state: payload.catway_state,
            })
            .await?;

        tracing::info!("Created catway {}", catway.catway_number);

        Ok(catway)
    }

    /// Retrieves a catway by its number.
    ///
    /// # Returns
    /// - `Ok(Catway)` - The catway
    /// - `Err(AppError::NotFound)` - No catway with that number
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_number(&self, catway_number: i32) -> Result<Catway, AppError> {
        let catway_repo = CatwayRepository::new(self.db);

        catway_repo
            .find_by_number(catway_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Catway not found".to_string()))
    }

    /// Retrieves all catways ordered by number.
    pub async fn get_all(&self) -> Result<Vec<Catway>, AppError> {
        let catway_repo = CatwayRepository::new(self.db);
        let catways = catway_repo.get_all().await?;
        Ok(catways)
    }

    /// Updates the state of a catway.
    ///
    /// The state is the only mutable field; number and type are fixed for
    /// the lifetime of the catway.
    ///
    /// # Arguments
    /// - `catway_number` - Number of the catway to update
    /// - `payload` - Update request body carrying the new state
    ///
    /// # Returns
    /// - `Ok(Catway)` - The updated catway
    /// - `Err(AppError::Validation)` - Blank state
    /// - `Err(AppError::NotFound)` - No catway with that number
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_state(
        &self,
        catway_number: i32,
        payload: UpdateCatwayDto,
    ) -> Result<Catway, AppError> {
        validate::validate_catway_update(&payload).map_err(AppError::Validation)?;

        let catway_repo = CatwayRepository::new(self.db);

        catway_repo
            .update_state(catway_number, payload.catway_state)
            .await?
            .ok_or_else(|| AppError::NotFound("Catway not found".to_string()))
    }

    /// Deletes a catway.
    ///
    /// Refused while any reservation still references the catway number, so
    /// bookings can never point at a berth that no longer exists.
    ///
    /// # Arguments
    /// - `catway_number` - Number of the catway to delete
    ///
    /// # Returns
    /// - `Ok(())` - Catway removed
    /// - `Err(AppError::NotFound)` - No catway with that number
    /// - `Err(AppError::Conflict)` - Reservations still reference the catway
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, catway_number: i32) -> Result<(), AppError> {
        let catway_repo = CatwayRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if catway_repo.find_by_number(catway_number).await?.is_none() {
            return Err(AppError::NotFound("Catway not found".to_string()));
        }

        let reservation_count = reservation_repo.count_for_catway(catway_number).await?;
        if reservation_count > 0 {
            return Err(AppError::Conflict(format!(
                "Catway {catway_number} has {reservation_count} reservation(s) and cannot be deleted"
            )));
        }

        catway_repo.delete_by_number(catway_number).await?;

        tracing::info!("Deleted catway {}", catway_number);

        Ok(())
    }
}
