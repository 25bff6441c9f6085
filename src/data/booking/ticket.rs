use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for booked tickets.
pub struct TicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TicketRepository<'a, C> {
    /// Creates a new instance of [`TicketRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a ticket binding a seat to a reservation
    ///
    /// Pass a transaction as the connection. The unique index on
    /// (show_session_id, row, seat) rejects the insert when another
    /// transaction booked the seat first; the resulting [`DbErr`] reports a
    /// unique constraint violation through [`DbErr::sql_err`].
    pub async fn create(
        &self,
        reservation_id: i32,
        show_session_id: i32,
        row: i32,
        seat: i32,
    ) -> Result<entity::ticket::Model, DbErr> {
        let ticket = entity::ticket::ActiveModel {
            row: ActiveValue::Set(row),
            seat: ActiveValue::Set(seat),
            show_session_id: ActiveValue::Set(show_session_id),
            reservation_id: ActiveValue::Set(reservation_id),
            ..Default::default()
        };

        ticket.insert(self.db).await
    }

    /// Checks whether a seat is already booked for a session
    ///
    /// `exclude_ticket_id` leaves a given ticket out of the check so an
    /// existing ticket can be re-validated against its own seat.
    pub async fn seat_exists(
        &self,
        show_session_id: i32,
        row: i32,
        seat: i32,
        exclude_ticket_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ShowSessionId.eq(show_session_id))
            .filter(entity::ticket::Column::Row.eq(row))
            .filter(entity::ticket::Column::Seat.eq(seat));

        if let Some(ticket_id) = exclude_ticket_id {
            query = query.filter(entity::ticket::Column::Id.ne(ticket_id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets all tickets of a session ordered by row then seat
    pub async fn get_by_session(
        &self,
        show_session_id: i32,
    ) -> Result<Vec<entity::ticket::Model>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ShowSessionId.eq(show_session_id))
            .order_by_asc(entity::ticket::Column::Row)
            .order_by_asc(entity::ticket::Column::Seat)
            .all(self.db)
            .await
    }

    /// Counts the booked tickets of a session
    pub async fn count_by_session(&self, show_session_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ShowSessionId.eq(show_session_id))
            .count(self.db)
            .await
    }
}
