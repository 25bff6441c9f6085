use sea_orm::{DatabaseConnection, LoaderTrait};

use crate::{
    data::{
        booking::TicketRepository,
        catalog::{SessionRepository, ShowRepository},
    },
    error::Error,
    model::catalog::{
        DomeDto, SeatDto, SessionDetailDto, SessionDto, SessionFilter, ShowDetailDto, ThemeDto,
    },
};

/// Service for reading scheduled show sessions with seat availability.
pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    /// Creates a new instance of [`SessionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists sessions matching the filter, most recent show time first.
    ///
    /// `tickets_available` is recomputed per read as the hosting dome's
    /// capacity minus the session's booked ticket count; no counter is cached
    /// anywhere, so committed reservations and rollbacks are always reflected.
    pub async fn list_sessions(&self, filter: &SessionFilter) -> Result<Vec<SessionDto>, Error> {
        let session_repository = SessionRepository::new(self.db);
        let ticket_repository = TicketRepository::new(self.db);

        let sessions = session_repository.find(filter).await?;

        let shows = sessions
            .load_one(entity::prelude::AstronomyShow, self.db)
            .await?;
        let domes = sessions
            .load_one(entity::prelude::PlanetariumDome, self.db)
            .await?;

        let mut dtos = Vec::with_capacity(sessions.len());

        for ((session, maybe_show), maybe_dome) in
            sessions.into_iter().zip(shows).zip(domes)
        {
            let show = maybe_show.ok_or_else(|| {
                // Would only occur if the foreign key constraint requiring the show to
                // exist in the database for the session is not properly enforced
                Error::InternalError(format!(
                    "Failed to find astronomy show ID {} for show session ID {}",
                    session.astronomy_show_id, session.id
                ))
            })?;
            let dome = maybe_dome.ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find planetarium dome ID {} for show session ID {}",
                    session.planetarium_dome_id, session.id
                ))
            })?;

            let booked = ticket_repository.count_by_session(session.id).await?;

            dtos.push(SessionDto {
                id: session.id,
                show_time: session.show_time,
                astronomy_show_title: show.title,
                planetarium_dome_name: dome.name.clone(),
                planetarium_dome_capacity: dome.capacity(),
                tickets_available: i64::from(dome.capacity()) - booked as i64,
            });
        }

        Ok(dtos)
    }

    /// Gets one session with its show, dome, and taken seats.
    pub async fn get_session(&self, session_id: i32) -> Result<Option<SessionDetailDto>, Error> {
        let session_repository = SessionRepository::new(self.db);
        let show_repository = ShowRepository::new(self.db);
        let ticket_repository = TicketRepository::new(self.db);

        let Some((session, maybe_dome)) = session_repository.get_with_dome(session_id).await?
        else {
            return Ok(None);
        };

        let dome = maybe_dome.ok_or_else(|| {
            Error::InternalError(format!(
                "Failed to find planetarium dome ID {} for show session ID {}",
                session.planetarium_dome_id, session.id
            ))
        })?;

        let (show, themes) = show_repository
            .get_by_id(session.astronomy_show_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find astronomy show ID {} for show session ID {}",
                    session.astronomy_show_id, session.id
                ))
            })?;

        let taken_places = ticket_repository
            .get_by_session(session.id)
            .await?
            .into_iter()
            .map(|ticket| SeatDto {
                row: ticket.row,
                seat: ticket.seat,
            })
            .collect();

        Ok(Some(SessionDetailDto {
            id: session.id,
            show_time: session.show_time,
            astronomy_show: ShowDetailDto {
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
            },
            planetarium_dome: DomeDto {
                id: dome.id,
                capacity: dome.capacity(),
                name: dome.name,
                rows: dome.rows,
                seats_in_row: dome.seats_in_row,
            },
            taken_places,
        }))
    }
}
