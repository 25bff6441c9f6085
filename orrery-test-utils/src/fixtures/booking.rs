//! Booking fixture helpers.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

/// Fixture helpers for users, reservations, and tickets.
pub struct BookingFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user
    pub async fn insert_user(&self) -> Result<entity::orrery_user::Model, TestError> {
        let user = entity::orrery_user::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }

    /// Inserts a reservation for an existing user
    pub async fn insert_reservation(
        &self,
        user_id: i32,
    ) -> Result<entity::reservation::Model, TestError> {
        let reservation = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(reservation.insert(self.db).await?)
    }

    /// Inserts a ticket for an existing reservation and session
    pub async fn insert_ticket(
        &self,
        reservation_id: i32,
        show_session_id: i32,
        row: i32,
        seat: i32,
    ) -> Result<entity::ticket::Model, TestError> {
        let ticket = entity::ticket::ActiveModel {
            row: ActiveValue::Set(row),
            seat: ActiveValue::Set(seat),
            show_session_id: ActiveValue::Set(show_session_id),
            reservation_id: ActiveValue::Set(reservation_id),
            ..Default::default()
        };

        Ok(ticket.insert(self.db).await?)
    }
}
