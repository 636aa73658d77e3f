//! Reservation factory for creating test reservation entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Defaults to a one-week interval starting tomorrow so that freshly created
/// reservations neither contain "now" nor collide with each other when placed
/// on different catways.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db)
///     .catway_number(catway.catway_number)
///     .dates(start, end)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    catway_number: i32,
    client_name: String,
    boat_name: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - catway_number: `1`
    /// - client_name: `"Test Client"`
    /// - boat_name: `"Test Boat"`
    /// - interval: `[tomorrow, tomorrow + 7 days)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            catway_number: 1,
            client_name: "Test Client".to_string(),
            boat_name: "Test Boat".to_string(),
            start_date: start,
            end_date: start + Duration::days(7),
        }
    }

    pub fn catway_number(mut self, catway_number: i32) -> Self {
        self.catway_number = catway_number;
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    pub fn boat_name(mut self, boat_name: impl Into<String>) -> Self {
        self.boat_name = boat_name.into();
        self
    }

    /// Sets both interval bounds at once.
    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            catway_number: ActiveValue::Set(self.catway_number),
            client_name: ActiveValue::Set(self.client_name),
            boat_name: ActiveValue::Set(self.boat_name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation on the given catway number with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
    catway_number: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db)
        .catway_number(catway_number)
        .build()
        .await
}
