use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::catalog::ShowFilter;

// LIKE treats % and _ as wildcards; filter input must match them literally
fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Repository for astronomy shows and their theme links.
pub struct ShowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShowRepository<'a, C> {
    /// Creates a new instance of [`ShowRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new show linked to the given themes
    ///
    /// Theme ids must exist in the show_theme table due to the foreign key
    /// constraint on the join table.
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        theme_ids: &[i32],
    ) -> Result<entity::astronomy_show::Model, DbErr> {
        let show = entity::astronomy_show::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.to_string()),
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

    /// Gets a show with its themes by show id
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::astronomy_show::Model,
            Vec<entity::show_theme::Model>,
        )>,
        DbErr,
    > {
        let show = match entity::prelude::AstronomyShow::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(show) => show,
            None => return Ok(None),
        };

        let shows = vec![show];
        let mut themes = shows
            .load_many_to_many(
                entity::prelude::ShowTheme,
                entity::prelude::AstronomyShowTheme,
                self.db,
            )
            .await?;

        let show = shows.into_iter().next();
        let themes = themes.pop();

        match (show, themes) {
            (Some(show), Some(themes)) => Ok(Some((show, themes))),
            _ => Ok(None),
        }
    }

    /// Finds shows matching the filter, with their themes loaded
    ///
    /// - `title_contains` is a case-insensitive substring match on the title
    /// - `theme_ids` matches shows having at least one theme in the set
    ///
    /// The result is deduplicated and ordered by title.
    pub async fn find(
        &self,
        filter: &ShowFilter,
    ) -> Result<
        Vec<(
            entity::astronomy_show::Model,
            Vec<entity::show_theme::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::AstronomyShow::find();

        if let Some(title) = &filter.title_contains {
            let pattern = format!("%{}%", escape_like_pattern(&title.to_lowercase()));

            query = query.filter(
                Expr::expr(Func::lower(Expr::col(
                    entity::astronomy_show::Column::Title,
                )))
                .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        if let Some(theme_ids) = &filter.theme_ids {
            // A show joins once per matching theme, hence the DISTINCT
            query = query
                .left_join(entity::prelude::AstronomyShowTheme)
                .filter(
                    entity::astronomy_show_theme::Column::ShowThemeId
                        .is_in(theme_ids.iter().copied()),
                )
                .distinct();
        }

        let shows = query
            .order_by_asc(entity::astronomy_show::Column::Title)
            .all(self.db)
            .await?;

        let themes = shows
            .load_many_to_many(
                entity::prelude::ShowTheme,
                entity::prelude::AstronomyShowTheme,
                self.db,
            )
            .await?;

        Ok(shows.into_iter().zip(themes).collect())
    }
}
