//! Reservation service for booking lifecycle business logic.
//!
//! Every mutation runs the same gauntlet: the catway in the path must exist,
//! the payload must validate, and the resulting interval must not overlap any
//! other reservation on that catway. The catway number in the path is
//! authoritative throughout; a reservation can never be moved to another
//! catway by editing it.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{catway::CatwayRepository, reservation::ReservationRepository},
    error::AppError,
    model::reservation::{
        CreateReservationDto, CreateReservationParam, Reservation, UpdateReservationDto,
        UpdateReservationParam,
    },
    validate,
};

/// Service providing business logic for reservation management.
pub struct ReservationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a reservation on the given catway.
    ///
    /// # Arguments
    /// - `catway_number` - Catway from the request path, the authoritative berth
    /// - `payload` - Reservation creation request body
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The booked reservation
    /// - `Err(AppError::NotFound)` - No catway with that number
    /// - `Err(AppError::Validation)` - Bad names or inverted interval
    /// - `Err(AppError::Conflict)` - Interval overlaps an existing reservation
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        catway_number: i32,
        payload: CreateReservationDto,
    ) -> Result<Reservation, AppError> {
        let catway_repo = CatwayRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if catway_repo.find_by_number(catway_number).await?.is_none() {
            return Err(AppError::NotFound("Catway not found".to_string()));
        }

        validate::validate_reservation_create(&payload).map_err(AppError::Validation)?;

        if let Some(conflict) = reservation_repo
            .find_overlapping(catway_number, payload.start_date, payload.end_date, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Catway {} is already reserved from {} to {}",
                catway_number, conflict.start_date, conflict.end_date
            )));
        }

        let reservation = reservation_repo
            .create(CreateReservationParam {
                catway_number,
                client_name: payload.client_name,
                boat_name: payload.boat_name,
                start_date: payload.start_date,
                end_date: payload.end_date,
            })
            .await?;

        tracing::info!(
            "Booked reservation {} on catway {}",
            reservation.id,
            catway_number
        );

        Ok(reservation)
    }

    /// Retrieves one reservation scoped to a catway.
    ///
    /// The reservation must both exist and belong to the catway named in the
    /// path. An id that exists under a different catway is rejected rather
    /// than silently returned.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation
    /// - `Err(AppError::NotFound)` - Unknown id
    /// - `Err(AppError::BadRequest)` - Id belongs to a different catway
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_for_catway_by_id(
        &self,
        catway_number: i32,
        id: i32,
    ) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let Some(reservation) = reservation_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Reservation not found".to_string()));
        };

        if reservation.catway_number != catway_number {
            return Err(AppError::BadRequest(format!(
                "Reservation {id} does not belong to catway {catway_number}"
            )));
        }

        Ok(reservation)
    }

    /// Retrieves all reservations across every catway, ordered by start date.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let reservations = reservation_repo.get_all().await?;
        Ok(reservations)
    }

    /// Retrieves the reservations active right now.
    pub async fn get_current(&self) -> Result<Vec<Reservation>, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);
        let reservations = reservation_repo.get_current(Utc::now()).await?;
        Ok(reservations)
    }

    /// Retrieves all reservations for one catway, ordered by start date.
    ///
    /// # Returns
    /// - `Ok(Vec<Reservation>)` - The catway's reservations
    /// - `Err(AppError::NotFound)` - No catway with that number
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_for_catway(&self, catway_number: i32) -> Result<Vec<Reservation>, AppError> {
        let catway_repo = CatwayRepository::new(self.db);
        let reservation_repo = ReservationRepository::new(self.db);

        if catway_repo.find_by_number(catway_number).await?.is_none() {
            return Err(AppError::NotFound("Catway not found".to_string()));
        }

        let reservations = reservation_repo.get_for_catway(catway_number).await?;
        Ok(reservations)
    }

    /// Applies a partial update to a reservation.
    ///
    /// The interval formed by merging stored and supplied dates is
    /// re-validated and re-checked for overlaps, with the reservation itself
    /// excluded from the scan so it never conflicts with its own old span.
    ///
    /// # Arguments
    /// - `catway_number` - Catway from the request path
    /// - `id` - Reservation to update
    /// - `payload` - Fields to apply
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::NotFound)` - Unknown id
    /// - `Err(AppError::BadRequest)` - Id belongs to a different catway
    /// - `Err(AppError::Validation)` - Bad names or inverted merged interval
    /// - `Err(AppError::Conflict)` - Merged interval overlaps another reservation
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        catway_number: i32,
        id: i32,
        payload: UpdateReservationDto,
    ) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let existing = self.get_for_catway_by_id(catway_number, id).await?;

        validate::validate_reservation_update(&payload, existing.start_date, existing.end_date)
            .map_err(AppError::Validation)?;

        let merged_start = payload.start_date.unwrap_or(existing.start_date);
        let merged_end = payload.end_date.unwrap_or(existing.end_date);

        if let Some(conflict) = reservation_repo
            .find_overlapping(catway_number, merged_start, merged_end, Some(id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Catway {} is already reserved from {} to {}",
                catway_number, conflict.start_date, conflict.end_date
            )));
        }

        let updated = reservation_repo
            .update(
                id,
                UpdateReservationParam {
                    client_name: payload.client_name,
                    boat_name: payload.boat_name,
                    start_date: payload.start_date,
                    end_date: payload.end_date,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        Ok(updated)
    }

    /// Deletes a reservation scoped to a catway.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation removed
    /// - `Err(AppError::NotFound)` - Unknown id
    /// - `Err(AppError::BadRequest)` - Id belongs to a different catway
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, catway_number: i32, id: i32) -> Result<(), AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        self.get_for_catway_by_id(catway_number, id).await?;

        reservation_repo.delete(id).await?;

        tracing::info!("Deleted reservation {} on catway {}", id, catway_number);

        Ok(())
    }
}
