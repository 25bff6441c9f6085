use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for show themes.
pub struct ThemeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ThemeRepository<'a, C> {
    /// Creates a new instance of [`ThemeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new theme
    pub async fn create(&self, name: &str) -> Result<entity::show_theme::Model, DbErr> {
        let theme = entity::show_theme::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        theme.insert(self.db).await
    }

    /// Gets a theme by its id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::show_theme::Model>, DbErr> {
        entity::prelude::ShowTheme::find_by_id(id).one(self.db).await
    }

    /// Gets all themes ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::show_theme::Model>, DbErr> {
        entity::prelude::ShowTheme::find()
            .order_by_asc(entity::show_theme::Column::Name)
            .all(self.db)
            .await
    }
}
