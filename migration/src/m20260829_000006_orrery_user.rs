use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrreryUser::Table)
                    .if_not_exists()
                    .col(pk_auto(OrreryUser::Id))
                    .col(timestamp(OrreryUser::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrreryUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrreryUser {
    Table,
    Id,
    CreatedAt,
}
