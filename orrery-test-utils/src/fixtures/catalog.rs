//! Catalog fixture helpers.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::error::TestError;

/// Standard show time used when a test doesn't care about scheduling.
pub const TEST_SHOW_TIME: &str = "2026-06-02T14:00:00";

/// Fixture helpers for themes, shows, domes, and sessions.
pub struct CatalogFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a show theme
    pub async fn insert_theme(&self, name: &str) -> Result<entity::show_theme::Model, TestError> {
        let theme = entity::show_theme::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(theme.insert(self.db).await?)
    }

    /// Inserts an astronomy show linked to the given themes
    pub async fn insert_show(
        &self,
        title: &str,
        theme_ids: &[i32],
    ) -> Result<entity::astronomy_show::Model, TestError> {
        let show = entity::astronomy_show::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set("Test description".to_string()),
            ..Default::default()
        };

        let show = show.insert(self.db).await?;

        if !theme_ids.is_empty() {
            let links = theme_ids
                .iter()
                .map(|theme_id| entity::astronomy_show_theme::ActiveModel {
                    astronomy_show_id: ActiveValue::Set(show.id),
                    show_theme_id: ActiveValue::Set(*theme_id),
                });

            entity::prelude::AstronomyShowTheme::insert_many(links)
                .exec(self.db)
                .await?;
        }

        Ok(show)
    }

    /// Inserts a planetarium dome with the given seating grid
    pub async fn insert_dome(
        &self,
        name: &str,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<entity::planetarium_dome::Model, TestError> {
        let dome = entity::planetarium_dome::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            rows: ActiveValue::Set(rows),
            seats_in_row: ActiveValue::Set(seats_in_row),
            ..Default::default()
        };

        Ok(dome.insert(self.db).await?)
    }

    /// Inserts a show session for an existing show and dome
    pub async fn insert_session(
        &self,
        astronomy_show_id: i32,
        planetarium_dome_id: i32,
        show_time: NaiveDateTime,
    ) -> Result<entity::show_session::Model, TestError> {
        let session = entity::show_session::ActiveModel {
            astronomy_show_id: ActiveValue::Set(astronomy_show_id),
            planetarium_dome_id: ActiveValue::Set(planetarium_dome_id),
            show_time: ActiveValue::Set(show_time),
            ..Default::default()
        };

        Ok(session.insert(self.db).await?)
    }

    /// Inserts a show, a dome with the given grid, and a session binding them
    ///
    /// Shortcut for reservation tests that need a bookable session and nothing
    /// else from the catalog.
    pub async fn insert_session_with_dome(
        &self,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<entity::show_session::Model, TestError> {
        let show = self.insert_show("Test Astronomy Show", &[]).await?;
        let dome = self.insert_dome("Test Planetarium Dome", rows, seats_in_row).await?;

        let show_time = TEST_SHOW_TIME
            .parse::<NaiveDateTime>()
            .expect("TEST_SHOW_TIME must be a valid timestamp");

        self.insert_session(show.id, dome.id, show_time).await
    }
}
