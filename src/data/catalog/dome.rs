use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository for planetarium domes.
pub struct DomeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DomeRepository<'a, C> {
    /// Creates a new instance of [`DomeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new dome with the given seating grid
    ///
    /// Rows and seats per row must both be at least 1; the database field
    /// constraints reject anything smaller.
    pub async fn create(
        &self,
        name: &str,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<entity::planetarium_dome::Model, DbErr> {
        let dome = entity::planetarium_dome::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            rows: ActiveValue::Set(rows),
            seats_in_row: ActiveValue::Set(seats_in_row),
            ..Default::default()
        };

        dome.insert(self.db).await
    }

    /// Gets a dome by its id
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::planetarium_dome::Model>, DbErr> {
        entity::prelude::PlanetariumDome::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all domes
    pub async fn get_all(&self) -> Result<Vec<entity::planetarium_dome::Model>, DbErr> {
        entity::prelude::PlanetariumDome::find().all(self.db).await
    }
}
