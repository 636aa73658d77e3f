//! HTTP API layer.
//!
//! Controllers translate between HTTP and the service layer: they run the
//! auth guard, deserialize payloads, call a service, and map domain models
//! to DTOs. No business rules live here.

pub mod auth;
pub mod catway;
pub mod reservation;
pub mod user;
