//! Domain models, operation parameters, and API DTOs.
//!
//! Each entity module holds three kinds of types, following the same
//! separation throughout:
//!
//! - Domain models (`User`, `Catway`, `Reservation`) converted from entity
//!   models at the repository boundary via `from_entity`.
//! - Parameter types (`Create*Param`, `Update*Param`) passed from services
//!   into repositories.
//! - DTOs serialized to and from HTTP bodies, produced via `into_dto`.
//!   Sensitive fields (password hashes) exist only on domain models, never
//!   on DTOs.

pub mod api;
pub mod catway;
pub mod reservation;
pub mod user;
