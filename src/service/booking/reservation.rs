//! Atomic creation of a reservation and its tickets.

use sea_orm::{DatabaseConnection, DatabaseTransaction, SqlErr, TransactionTrait};

use crate::{
    data::booking::{ReservationRepository, TicketRepository},
    error::{Error, ReservationError},
    model::booking::{ReservationDto, TicketDto, TicketRequest},
    service::booking::SeatValidator,
};

/// Service for creating and listing seat reservations.
///
/// Reservation creation is all-or-nothing: the reservation row and every
/// requested ticket are persisted in a single transaction, and any validation
/// failure rolls the whole attempt back so partial reservations are never
/// observable.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new instance of [`ReservationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Atomically creates a reservation with all of the requested tickets.
    ///
    /// Every ticket request is validated inside the transaction (row bound,
    /// seat bound, seat not taken); the first failure aborts the entire
    /// attempt and nothing is persisted. A concurrent booking that wins the
    /// race for the same seat surfaces as [`ReservationError::SeatTaken`] when
    /// the unique index on (session, row, seat) rejects the insert at commit
    /// time. No automatic retry is performed; the caller may resubmit.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated owner of the reservation, trusted verbatim
    /// - `requests` - Non-empty sequence of requested seats
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The reservation with its tickets in request order
    /// - `Err(Error::ReservationError)` - `EmptyReservation`, `SessionNotFound`,
    ///   `RowOutOfRange`, `SeatOutOfRange`, or `SeatTaken`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_reservation(
        &self,
        user_id: i32,
        requests: &[TicketRequest],
    ) -> Result<ReservationDto, Error> {
        if requests.is_empty() {
            return Err(ReservationError::EmptyReservation.into());
        }

        let txn = self.db.begin().await?;

        match Self::create_in_transaction(&txn, user_id, requests).await {
            Ok(reservation) => {
                txn.commit().await?;
                Ok(reservation)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn create_in_transaction(
        txn: &DatabaseTransaction,
        user_id: i32,
        requests: &[TicketRequest],
    ) -> Result<ReservationDto, Error> {
        let reservation_repository = ReservationRepository::new(txn);
        let ticket_repository = TicketRepository::new(txn);
        let validator = SeatValidator::new(txn);

        let reservation = reservation_repository.create(user_id).await?;

        let mut tickets = Vec::with_capacity(requests.len());

        for request in requests {
            validator
                .validate(request.show_session_id, request.row, request.seat, None)
                .await?;

            let ticket = ticket_repository
                .create(
                    reservation.id,
                    request.show_session_id,
                    request.row,
                    request.seat,
                )
                .await
                .map_err(|err| match err.sql_err() {
                    // Lost a race to a concurrent booking that passed its own
                    // pre-check before either transaction committed
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        Error::ReservationError(ReservationError::SeatTaken {
                            row: request.row,
                            seat: request.seat,
                        })
                    }
                    _ => Error::DbErr(err),
                })?;

            tickets.push(TicketDto::from(ticket));
        }

        Ok(ReservationDto {
            id: reservation.id,
            created_at: reservation.created_at,
            tickets,
        })
    }

    /// Lists a user's reservations with their tickets, newest first.
    ///
    /// Tickets within each reservation are ordered by row then seat.
    pub async fn list_reservations(&self, user_id: i32) -> Result<Vec<ReservationDto>, Error> {
        let reservation_repository = ReservationRepository::new(self.db);

        let reservations = reservation_repository.get_many_by_user_id(user_id).await?;

        Ok(reservations
            .into_iter()
            .map(|(reservation, mut tickets)| {
                tickets.sort_by_key(|ticket| (ticket.row, ticket.seat));

                ReservationDto {
                    id: reservation.id,
                    created_at: reservation.created_at,
                    tickets: tickets.into_iter().map(TicketDto::from).collect(),
                }
            })
            .collect())
    }
}
