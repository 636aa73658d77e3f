use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "catways")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Business identity of the berth, distinct from the generated row id.
    #[sea_orm(unique)]
    pub catway_number: i32,

    /// Either "long" or "short", immutable after creation.
    pub catway_type: String,

    /// Free-text maintenance/availability status.
    pub catway_state: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
