use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catway::Table)
                    .if_not_exists()
                    .col(pk_auto(Catway::Id))
                    .col(integer_uniq(Catway::CatwayNumber))
                    .col(string(Catway::CatwayType))
                    .col(string(Catway::CatwayState))
                    .col(
                        timestamp(Catway::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Catway::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Catway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Catway {
    Table,
    Id,
    CatwayNumber,
    CatwayType,
    CatwayState,
    CreatedAt,
    UpdatedAt,
}
