//! Tests for SessionService::list_sessions.
//!
//! Verifies that seat availability is derived from dome capacity minus booked
//! tickets on every read, and that the date and show filters select the right
//! sessions.

use orrery::{model::catalog::SessionFilter, service::catalog::SessionService};
use orrery_test_utils::prelude::*;

/// Expect tickets_available to equal capacity minus booked ticket count
#[tokio::test]
async fn computes_tickets_available_per_read() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let session_service = SessionService::new(&test.db);

    let sessions = session_service
        .list_sessions(&SessionFilter::default())
        .await
        .unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].planetarium_dome_capacity, 400);
    assert_eq!(sessions[0].tickets_available, 400);

    let user = test.booking().insert_user().await?;
    let reservation = test.booking().insert_reservation(user.id).await?;
    for seat in 1..=3 {
        test.booking()
            .insert_ticket(reservation.id, session.id, 1, seat)
            .await?;
    }

    let sessions = session_service
        .list_sessions(&SessionFilter::default())
        .await
        .unwrap();
    assert_eq!(sessions[0].tickets_available, 397);

    Ok(())
}

/// Expect the date filter to match the calendar date, ignoring time of day
#[tokio::test]
async fn filters_by_calendar_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let show = test.catalog().insert_show("Cosmic Voyage", &[]).await?;
    let dome = test.catalog().insert_dome("Main Dome", 20, 20).await?;

    let morning = "2026-06-02T09:00:00".parse().unwrap();
    let evening = "2026-06-02T21:30:00".parse().unwrap();
    let next_day = "2026-06-03T09:00:00".parse().unwrap();

    test.catalog().insert_session(show.id, dome.id, morning).await?;
    test.catalog().insert_session(show.id, dome.id, evening).await?;
    test.catalog().insert_session(show.id, dome.id, next_day).await?;

    let session_service = SessionService::new(&test.db);

    let filter = SessionFilter {
        date: Some("2026-06-02".parse().unwrap()),
        show_id: None,
    };
    let sessions = session_service.list_sessions(&filter).await.unwrap();

    assert_eq!(sessions.len(), 2);
    // Most recent show time first
    assert_eq!(sessions[0].show_time, evening);
    assert_eq!(sessions[1].show_time, morning);

    Ok(())
}

/// Expect the show filter to be an exact match
#[tokio::test]
async fn filters_by_show_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let show1 = test.catalog().insert_show("Cosmic Voyage", &[]).await?;
    let show2 = test.catalog().insert_show("Black Holes", &[]).await?;
    let dome = test.catalog().insert_dome("Main Dome", 20, 20).await?;

    let show_time = "2026-06-02T14:00:00".parse().unwrap();
    test.catalog().insert_session(show1.id, dome.id, show_time).await?;
    test.catalog().insert_session(show2.id, dome.id, show_time).await?;

    let session_service = SessionService::new(&test.db);

    let filter = SessionFilter {
        date: None,
        show_id: Some(show1.id),
    };
    let sessions = session_service.list_sessions(&filter).await.unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].astronomy_show_title, "Cosmic Voyage");

    Ok(())
}

/// Expect Error when listing sessions without required tables being created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let session_service = SessionService::new(&test.db);
    let result = session_service.list_sessions(&SessionFilter::default()).await;

    assert!(result.is_err());

    Ok(())
}
