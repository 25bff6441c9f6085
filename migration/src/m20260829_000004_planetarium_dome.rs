use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetariumDome::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetariumDome::Id))
                    .col(string(PlanetariumDome::Name))
                    .col(integer(PlanetariumDome::Rows).check(Expr::col(PlanetariumDome::Rows).gte(1)))
                    .col(
                        integer(PlanetariumDome::SeatsInRow)
                            .check(Expr::col(PlanetariumDome::SeatsInRow).gte(1)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanetariumDome::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlanetariumDome {
    Table,
    Id,
    Name,
    Rows,
    SeatsInRow,
}
