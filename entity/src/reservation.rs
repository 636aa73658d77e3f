use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Soft reference to `catways.catway_number`. Catways and reservations
    /// are independent top-level records tied only by this value.
    pub catway_number: i32,

    pub client_name: String,

    pub boat_name: String,

    /// Start of the half-open booking interval `[start_date, end_date)`.
    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
