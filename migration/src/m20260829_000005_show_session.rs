use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260829_000002_astronomy_show::AstronomyShow, m20260829_000004_planetarium_dome::PlanetariumDome,
};

static IDX_SHOW_SESSION_SHOW_TIME: &str = "idx-show_session-show_time";
static FK_SHOW_SESSION_SHOW_ID: &str = "fk-show_session-astronomy_show_id";
static FK_SHOW_SESSION_DOME_ID: &str = "fk-show_session-planetarium_dome_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShowSession::Table)
                    .if_not_exists()
                    .col(pk_auto(ShowSession::Id))
                    .col(integer(ShowSession::AstronomyShowId))
                    .col(integer(ShowSession::PlanetariumDomeId))
                    .col(timestamp(ShowSession::ShowTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOW_SESSION_SHOW_TIME)
                    .table(ShowSession::Table)
                    .col(ShowSession::ShowTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOW_SESSION_SHOW_ID)
                    .from_tbl(ShowSession::Table)
                    .from_col(ShowSession::AstronomyShowId)
                    .to_tbl(AstronomyShow::Table)
                    .to_col(AstronomyShow::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOW_SESSION_DOME_ID)
                    .from_tbl(ShowSession::Table)
                    .from_col(ShowSession::PlanetariumDomeId)
                    .to_tbl(PlanetariumDome::Table)
                    .to_col(PlanetariumDome::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOW_SESSION_DOME_ID)
                    .table(ShowSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOW_SESSION_SHOW_ID)
                    .table(ShowSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOW_SESSION_SHOW_TIME)
                    .table(ShowSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShowSession::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShowSession {
    Table,
    Id,
    AstronomyShowId,
    PlanetariumDomeId,
    ShowTime,
}
