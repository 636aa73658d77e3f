//! Reservation domain models, parameters, and DTOs.
//!
//! Reservation intervals are half-open: `start_date` is inclusive,
//! `end_date` exclusive, so two bookings that merely touch at a boundary
//! instant do not conflict. The overlap predicate itself lives in the
//! repository query (`ReservationRepository::find_overlapping`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking of a catway for a client and boat over a half-open date interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// Soft reference to the catway's business number.
    pub catway_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            catway_number: entity.catway_number,
            client_name: entity.client_name,
            boat_name: entity.boat_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the reservation domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            catway_number: self.catway_number,
            client_name: self.client_name,
            boat_name: self.boat_name,
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a reservation. The catway number always comes
/// from the request path, never the body.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub catway_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Parameters for a partial reservation update. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParam {
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Reservation representation returned by the API.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub catway_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reservation creation request body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub client_name: String,
    pub boat_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Reservation update request body; only supplied fields are applied.
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateReservationDto {
    pub client_name: Option<String>,
    pub boat_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
