//! Seat validation against dome geometry and booked tickets.

use sea_orm::ConnectionTrait;

use crate::{
    data::{booking::TicketRepository, catalog::SessionRepository},
    error::{Error, ReservationError},
};

/// Checks a requested seat against a dome's seating grid.
///
/// The row bound is checked before the seat bound; the first violated rule is
/// reported and further checks are skipped.
pub fn check_seat_bounds(
    row: i32,
    seat: i32,
    dome: &entity::planetarium_dome::Model,
) -> Result<(), ReservationError> {
    if row < 1 || row > dome.rows {
        return Err(ReservationError::RowOutOfRange {
            row,
            rows: dome.rows,
        });
    }

    if seat < 1 || seat > dome.seats_in_row {
        return Err(ReservationError::SeatOutOfRange {
            seat,
            seats_in_row: dome.seats_in_row,
        });
    }

    Ok(())
}

/// Validates a candidate ticket before it is persisted.
///
/// Rules are evaluated in order: row bound, seat bound, then uniqueness
/// against the session's already-booked seats; evaluation short-circuits on
/// the first failure. The bounds come from the dome hosting the ticket's
/// session. The uniqueness check here is a best-effort pre-check for a clear
/// error message; under concurrent bookings the database's unique index is
/// what actually decides the winner.
pub struct SeatValidator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeatValidator<'a, C> {
    /// Creates a new instance of [`SeatValidator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Validates a requested (row, seat) for a show session.
    ///
    /// `exclude_ticket_id` leaves a given ticket out of the uniqueness check
    /// so an existing ticket can be re-validated without colliding with
    /// itself.
    ///
    /// # Returns
    /// - `Ok(())` - The seat is within bounds and not taken
    /// - `Err(Error::ReservationError)` - The first violated rule:
    ///   `SessionNotFound`, `RowOutOfRange`, `SeatOutOfRange`, or `SeatTaken`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn validate(
        &self,
        show_session_id: i32,
        row: i32,
        seat: i32,
        exclude_ticket_id: Option<i32>,
    ) -> Result<(), Error> {
        let session_repository = SessionRepository::new(self.db);
        let ticket_repository = TicketRepository::new(self.db);

        let Some((session, maybe_dome)) = session_repository.get_with_dome(show_session_id).await?
        else {
            return Err(ReservationError::SessionNotFound(show_session_id).into());
        };

        let dome = maybe_dome.ok_or_else(|| {
            // Would only occur if the foreign key constraint requiring the dome to
            // exist in the database for the session is not properly enforced
            Error::InternalError(format!(
                "Failed to find planetarium dome ID {} for show session ID {}",
                session.planetarium_dome_id, session.id
            ))
        })?;

        check_seat_bounds(row, seat, &dome)?;

        if ticket_repository
            .seat_exists(session.id, row, seat, exclude_ticket_id)
            .await?
        {
            return Err(ReservationError::SeatTaken { row, seat }.into());
        }

        Ok(())
    }
}
