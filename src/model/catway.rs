//! Catway domain models, parameters, and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepted catway type tokens.
///
/// Kept as a configuration constant rather than literals scattered across
/// validators so the accepted vocabulary is defined in exactly one place.
pub const CATWAY_TYPES: [&str; 2] = ["long", "short"];

/// Berth identified by its unique catway number.
#[derive(Debug, Clone, PartialEq)]
pub struct Catway {
    pub id: i32,
    /// Business identity, distinct from the generated row id.
    pub catway_number: i32,
    pub catway_type: String,
    pub catway_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Catway {
    /// Converts an entity model to a catway domain model at the repository boundary.
    pub fn from_entity(entity: entity::catway::Model) -> Self {
        Self {
            id: entity.id,
            catway_number: entity.catway_number,
            catway_type: entity.catway_type,
            catway_state: entity.catway_state,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the catway domain model to a DTO for API responses.
    pub fn into_dto(self) -> CatwayDto {
        CatwayDto {
            id: self.id,
            catway_number: self.catway_number,
            catway_type: self.catway_type,
            catway_state: self.catway_state,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a catway.
#[derive(Debug, Clone)]
pub struct CreateCatwayParam {
    pub catway_number: i32,
    pub catway_type: String,
    pub catway_state: String,
}

/// Catway representation returned by the API.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CatwayDto {
    pub id: i32,
    pub catway_number: i32,
    pub catway_type: String,
    pub catway_state: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catway creation request body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCatwayDto {
    pub catway_number: i32,
    pub catway_type: String,
    pub catway_state: String,
}

/// Catway update request body. Only the state is mutable after creation.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateCatwayDto {
    pub catway_state: String,
}
