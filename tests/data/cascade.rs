//! Tests for cascading deletes across the booking schema.

use orrery::data::booking::UserRepository;
use orrery_test_utils::prelude::*;
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};

/// Expect deleting a user to remove their reservations and tickets
#[tokio::test]
async fn deleting_user_removes_reservations_and_tickets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let user = test.booking().insert_user().await?;
    let other_user = test.booking().insert_user().await?;

    let reservation = test.booking().insert_reservation(user.id).await?;
    test.booking()
        .insert_ticket(reservation.id, session.id, 1, 1)
        .await?;
    test.booking()
        .insert_ticket(reservation.id, session.id, 1, 2)
        .await?;

    let other_reservation = test.booking().insert_reservation(other_user.id).await?;
    test.booking()
        .insert_ticket(other_reservation.id, session.id, 2, 1)
        .await?;

    let user_repository = UserRepository::new(&test.db);
    user_repository.delete(user.id).await?;

    let reservation_count = entity::prelude::Reservation::find().count(&test.db).await?;
    let ticket_count = entity::prelude::Ticket::find().count(&test.db).await?;

    assert_eq!(reservation_count, 1);
    assert_eq!(ticket_count, 1);

    Ok(())
}

/// Expect deleting a show session to remove its tickets but keep reservations
#[tokio::test]
async fn deleting_session_removes_its_tickets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let user = test.booking().insert_user().await?;
    let reservation = test.booking().insert_reservation(user.id).await?;
    test.booking()
        .insert_ticket(reservation.id, session.id, 1, 1)
        .await?;

    session.delete(&test.db).await?;

    let ticket_count = entity::prelude::Ticket::find().count(&test.db).await?;
    let reservation_count = entity::prelude::Reservation::find().count(&test.db).await?;

    assert_eq!(ticket_count, 0);
    assert_eq!(reservation_count, 1);

    Ok(())
}
