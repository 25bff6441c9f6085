use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    LoaderTrait, QueryFilter, QueryOrder,
};

/// Repository for reservations.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new reservation for the given user, stamped with the current time
    ///
    /// Pass a transaction as the connection; the reservation service always
    /// creates the reservation row and its tickets in one transaction.
    pub async fn create(&self, user_id: i32) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        reservation.insert(self.db).await
    }

    /// Deletes a reservation, cascading to its tickets
    ///
    /// Administrative operation; reservations are never deleted as part of the
    /// booking flow. Returns OK regardless of the reservation existing; to
    /// confirm the deletion result check the [`DeleteResult::rows_affected`]
    /// field.
    pub async fn delete(&self, reservation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await
    }

    /// Gets all reservations of a user with their tickets, newest first
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::reservation::Model, Vec<entity::ticket::Model>)>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await?;

        let tickets = reservations
            .load_many(entity::prelude::Ticket, self.db)
            .await?;

        Ok(reservations.into_iter().zip(tickets).collect())
    }
}
