use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260829_000001_show_theme::ShowTheme, m20260829_000002_astronomy_show::AstronomyShow,
};

static FK_SHOW_THEME_SHOW_ID: &str = "fk-astronomy_show_theme-astronomy_show_id";
static FK_SHOW_THEME_THEME_ID: &str = "fk-astronomy_show_theme-show_theme_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AstronomyShowTheme::Table)
                    .if_not_exists()
                    .col(integer(AstronomyShowTheme::AstronomyShowId))
                    .col(integer(AstronomyShowTheme::ShowThemeId))
                    .primary_key(
                        Index::create()
                            .col(AstronomyShowTheme::AstronomyShowId)
                            .col(AstronomyShowTheme::ShowThemeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOW_THEME_SHOW_ID)
                    .from_tbl(AstronomyShowTheme::Table)
                    .from_col(AstronomyShowTheme::AstronomyShowId)
                    .to_tbl(AstronomyShow::Table)
                    .to_col(AstronomyShow::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOW_THEME_THEME_ID)
                    .from_tbl(AstronomyShowTheme::Table)
                    .from_col(AstronomyShowTheme::ShowThemeId)
                    .to_tbl(ShowTheme::Table)
                    .to_col(ShowTheme::Id)
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
                    .name(FK_SHOW_THEME_THEME_ID)
                    .table(AstronomyShowTheme::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOW_THEME_SHOW_ID)
                    .table(AstronomyShowTheme::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AstronomyShowTheme::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AstronomyShowTheme {
    Table,
    AstronomyShowId,
    ShowThemeId,
}
