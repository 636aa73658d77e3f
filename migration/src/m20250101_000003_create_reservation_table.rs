use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // catway_number is not a foreign key: reservations keep a soft
        // reference so the two records stay independent top-level documents.
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::CatwayNumber))
                    .col(string(Reservation::ClientName))
                    .col(string(Reservation::BoatName))
                    .col(timestamp(Reservation::StartDate))
                    .col(timestamp(Reservation::EndDate))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_catway_number")
                    .table(Reservation::Table)
                    .col(Reservation::CatwayNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    CatwayNumber,
    ClientName,
    BoatName,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
