use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::ShowRepository,
    error::Error,
    model::catalog::{ShowDetailDto, ShowDto, ShowFilter, ThemeDto},
};

/// Service for reading the astronomy show catalog.
pub struct ShowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowService<'a> {
    /// Creates a new instance of [`ShowService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists shows matching the filter, with theme names attached.
    ///
    /// `title_contains` is a case-insensitive substring match; `theme_ids`
    /// matches shows having at least one theme in the set. Results are
    /// deduplicated and ordered by title.
    pub async fn list_shows(&self, filter: &ShowFilter) -> Result<Vec<ShowDto>, Error> {
        let show_repository = ShowRepository::new(self.db);

        let shows = show_repository.find(filter).await?;

        Ok(shows
            .into_iter()
            .map(|(show, themes)| ShowDto {
                id: show.id,
                title: show.title,
                description: show.description,
                themes: themes.into_iter().map(|theme| theme.name).collect(),
            })
            .collect())
    }

    /// Gets one show with its full theme records.
    pub async fn get_show(&self, show_id: i32) -> Result<Option<ShowDetailDto>, Error> {
        let show_repository = ShowRepository::new(self.db);

        let Some((show, themes)) = show_repository.get_by_id(show_id).await? else {
            return Ok(None);
        };

        Ok(Some(ShowDetailDto {
            id: show.id,
            title: show.title,
            description: show.description,
            themes: themes
                .into_iter()
                .map(|theme| ThemeDto {
                    id: theme.id,
                    name: theme.name,
                })
                .collect(),
        }))
    }
}
