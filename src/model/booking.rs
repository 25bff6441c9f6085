//! Booking DTOs: ticket requests and reservations.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A requested seat for one show session.
#[derive(Clone, Serialize, Deserialize)]
pub struct TicketRequest {
    /// The show session to book a seat for.
    pub show_session_id: i32,
    /// Requested row, 1-based.
    pub row: i32,
    /// Requested seat within the row, 1-based.
    pub seat: i32,
}

/// A booked ticket.
#[derive(Clone, Serialize, Deserialize)]
pub struct TicketDto {
    /// Ticket identifier.
    pub id: i32,
    /// Booked row.
    pub row: i32,
    /// Booked seat within the row.
    pub seat: i32,
    /// The show session the seat belongs to.
    pub show_session_id: i32,
}

/// A user's reservation with all of its tickets.
#[derive(Clone, Serialize, Deserialize)]
pub struct ReservationDto {
    /// Reservation identifier.
    pub id: i32,
    /// When the reservation was created.
    pub created_at: NaiveDateTime,
    /// The reserved seats. Creation returns them in request order; listings
    /// return them ordered by row then seat.
    pub tickets: Vec<TicketDto>,
}

impl From<entity::ticket::Model> for TicketDto {
    fn from(ticket: entity::ticket::Model) -> Self {
        Self {
            id: ticket.id,
            row: ticket.row,
            seat: ticket.seat,
            show_session_id: ticket.show_session_id,
        }
    }
}
