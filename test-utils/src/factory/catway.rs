//! Catway factory for creating test catway entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test catways with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::catway::CatwayFactory;
///
/// let catway = CatwayFactory::new(&db)
///     .catway_number(42)
///     .catway_type("short")
///     .build()
///     .await?;
/// ```
pub struct CatwayFactory<'a> {
    db: &'a DatabaseConnection,
    catway_number: i32,
    catway_type: String,
    catway_state: String,
}

impl<'a> CatwayFactory<'a> {
    /// Creates a new CatwayFactory with default values.
    ///
    /// Defaults:
    /// - catway_number: auto-incremented unique integer
    /// - catway_type: `"long"`
    /// - catway_state: `"good condition"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            catway_number: next_id(),
            catway_type: "long".to_string(),
            catway_state: "good condition".to_string(),
        }
    }

    pub fn catway_number(mut self, catway_number: i32) -> Self {
        self.catway_number = catway_number;
        self
    }

    pub fn catway_type(mut self, catway_type: impl Into<String>) -> Self {
        self.catway_type = catway_type.into();
        self
    }

    pub fn catway_state(mut self, catway_state: impl Into<String>) -> Self {
        self.catway_state = catway_state.into();
        self
    }

    /// Builds and inserts the catway entity into the database.
    pub async fn build(self) -> Result<entity::catway::Model, DbErr> {
        let now = Utc::now();
        entity::catway::ActiveModel {
            catway_number: ActiveValue::Set(self.catway_number),
            catway_type: ActiveValue::Set(self.catway_type),
            catway_state: ActiveValue::Set(self.catway_state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catway with default values.
pub async fn create_catway(db: &DatabaseConnection) -> Result<entity::catway::Model, DbErr> {
    CatwayFactory::new(db).build().await
}

/// Creates a catway with a specific catway number.
pub async fn create_catway_with_number(
    db: &DatabaseConnection,
    catway_number: i32,
) -> Result<entity::catway::Model, DbErr> {
    CatwayFactory::new(db)
        .catway_number(catway_number)
        .build()
        .await
}
