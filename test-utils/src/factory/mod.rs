//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let catway = factory::catway::create_catway(&db).await?;
//!
//!     // Customize through the builder
//!     let reservation = factory::reservation::ReservationFactory::new(&db)
//!         .catway_number(catway.catway_number)
//!         .client_name("Jane Moreau")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod catway;
pub mod helpers;
pub mod reservation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use catway::{create_catway, create_catway_with_number};
pub use reservation::create_reservation;
pub use user::{create_admin, create_user};
