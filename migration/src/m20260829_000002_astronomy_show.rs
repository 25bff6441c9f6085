use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AstronomyShow::Table)
                    .if_not_exists()
                    .col(pk_auto(AstronomyShow::Id))
                    .col(string(AstronomyShow::Title))
                    .col(text(AstronomyShow::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AstronomyShow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AstronomyShow {
    Table,
    Id,
    Title,
    Description,
}
