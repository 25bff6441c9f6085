//! Reservation domain errors.

use thiserror::Error;

/// Recoverable failures when validating or creating a reservation.
///
/// All variants name the offending field so the presentation layer can produce
/// field-scoped client-error messages. The caller may resubmit with corrected
/// input; the backend never retries on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Requested row is outside the dome's row range.
    #[error("row {row} must be within the range of 1 to {rows} rows in the planetarium dome")]
    RowOutOfRange {
        /// The requested row.
        row: i32,
        /// Number of rows in the dome.
        rows: i32,
    },
    /// Requested seat is outside the row's seat range.
    #[error("seat {seat} must be within the range of 1 to {seats_in_row} seats in the row")]
    SeatOutOfRange {
        /// The requested seat.
        seat: i32,
        /// Number of seats per row in the dome.
        seats_in_row: i32,
    },
    /// The seat is already booked for this show session.
    #[error("seat {seat} in row {row} is already taken for this show session")]
    SeatTaken {
        /// The requested row.
        row: i32,
        /// The requested seat.
        seat: i32,
    },
    /// A reservation request contained no tickets.
    #[error("a reservation must contain at least one ticket")]
    EmptyReservation,
    /// A ticket request referenced a show session that does not exist.
    #[error("show session ID {0} not found")]
    SessionNotFound(i32),
}
