//! Tests for SessionService::get_session.

use orrery::service::catalog::SessionService;
use orrery_test_utils::prelude::*;

/// Expect the session detail to embed show, dome, and taken seats in order
#[tokio::test]
async fn returns_session_with_taken_places() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let user = test.booking().insert_user().await?;
    let reservation = test.booking().insert_reservation(user.id).await?;
    test.booking()
        .insert_ticket(reservation.id, session.id, 5, 6)
        .await?;
    test.booking()
        .insert_ticket(reservation.id, session.id, 2, 9)
        .await?;

    let session_service = SessionService::new(&test.db);
    let detail = session_service.get_session(session.id).await.unwrap();

    let detail = detail.expect("session must exist");
    assert_eq!(detail.id, session.id);
    assert_eq!(detail.planetarium_dome.rows, 20);
    assert_eq!(detail.planetarium_dome.seats_in_row, 20);
    assert_eq!(detail.planetarium_dome.capacity, 400);
    assert_eq!(detail.astronomy_show.title, "Test Astronomy Show");

    // Ordered by row then seat
    assert_eq!(detail.taken_places.len(), 2);
    assert_eq!(detail.taken_places[0].row, 2);
    assert_eq!(detail.taken_places[0].seat, 9);
    assert_eq!(detail.taken_places[1].row, 5);
    assert_eq!(detail.taken_places[1].seat, 6);

    Ok(())
}

/// Expect None for a session id that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let session_service = SessionService::new(&test.db);
    let detail = session_service.get_session(1).await.unwrap();

    assert!(detail.is_none());

    Ok(())
}
