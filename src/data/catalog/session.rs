use chrono::{NaiveDateTime, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::catalog::SessionFilter;

/// Repository for scheduled show sessions.
pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new show session
    pub async fn create(
        &self,
        astronomy_show_id: i32,
        planetarium_dome_id: i32,
        show_time: NaiveDateTime,
    ) -> Result<entity::show_session::Model, DbErr> {
        let session = entity::show_session::ActiveModel {
            astronomy_show_id: ActiveValue::Set(astronomy_show_id),
            planetarium_dome_id: ActiveValue::Set(planetarium_dome_id),
            show_time: ActiveValue::Set(show_time),
            ..Default::default()
        };

        session.insert(self.db).await
    }

    /// Gets a session together with its dome
    ///
    /// The dome provides the seat bounds for validating ticket requests
    /// against this session.
    pub async fn get_with_dome(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::show_session::Model,
            Option<entity::planetarium_dome::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ShowSession::find_by_id(id)
            .find_also_related(entity::prelude::PlanetariumDome)
            .one(self.db)
            .await
    }

    /// Finds sessions matching the filter, most recent show time first
    ///
    /// - `date` matches sessions whose show time falls on that calendar date
    /// - `show_id` is an exact match on the astronomy show
    pub async fn find(
        &self,
        filter: &SessionFilter,
    ) -> Result<Vec<entity::show_session::Model>, DbErr> {
        let mut query = entity::prelude::ShowSession::find();

        if let Some(date) = filter.date {
            let day_start = date.and_time(NaiveTime::MIN);
            query = query.filter(entity::show_session::Column::ShowTime.gte(day_start));

            if let Some(next_day) = date.succ_opt() {
                let day_end = next_day.and_time(NaiveTime::MIN);
                query = query.filter(entity::show_session::Column::ShowTime.lt(day_end));
            }
        }

        if let Some(show_id) = filter.show_id {
            query = query.filter(entity::show_session::Column::AstronomyShowId.eq(show_id));
        }

        query
            .order_by_desc(entity::show_session::Column::ShowTime)
            .all(self.db)
            .await
    }
}
