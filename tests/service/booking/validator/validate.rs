//! Tests for SeatValidator::validate.
//!
//! Verifies the rule evaluation order (row bound, seat bound, seat taken),
//! session resolution, and the exclusion id used when re-validating an
//! existing ticket.

use orrery::{
    error::{Error, ReservationError},
    service::booking::SeatValidator,
};
use orrery_test_utils::prelude::*;

/// Expect an in-bounds, unbooked seat to validate
#[tokio::test]
async fn accepts_available_seat() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let validator = SeatValidator::new(&test.db);
    let result = validator.validate(session.id, 3, 4, None).await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect rows outside 1..=rows to fail with RowOutOfRange
#[tokio::test]
async fn rejects_row_out_of_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let validator = SeatValidator::new(&test.db);

    for row in [0, 21] {
        let result = validator.validate(session.id, row, 1, None).await;
        assert!(matches!(
            result,
            Err(Error::ReservationError(ReservationError::RowOutOfRange {
                rows: 20,
                ..
            }))
        ));
    }

    Ok(())
}

/// Expect seats outside 1..=seats_in_row to fail with SeatOutOfRange
#[tokio::test]
async fn rejects_seat_out_of_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let validator = SeatValidator::new(&test.db);

    for seat in [0, 21] {
        let result = validator.validate(session.id, 1, seat, None).await;
        assert!(matches!(
            result,
            Err(Error::ReservationError(ReservationError::SeatOutOfRange {
                seats_in_row: 20,
                ..
            }))
        ));
    }

    Ok(())
}

/// Expect an already-booked seat to fail with SeatTaken
#[tokio::test]
async fn rejects_taken_seat() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let user = test.booking().insert_user().await?;
    let reservation = test.booking().insert_reservation(user.id).await?;
    test.booking()
        .insert_ticket(reservation.id, session.id, 3, 4)
        .await?;

    let validator = SeatValidator::new(&test.db);
    let result = validator.validate(session.id, 3, 4, None).await;

    assert!(matches!(
        result,
        Err(Error::ReservationError(ReservationError::SeatTaken {
            row: 3,
            seat: 4
        }))
    ));

    Ok(())
}

/// Expect the row rule to be reported before the seat rule
#[tokio::test]
async fn reports_row_violation_before_seat_violation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let validator = SeatValidator::new(&test.db);
    let result = validator.validate(session.id, 0, 0, None).await;

    assert!(matches!(
        result,
        Err(Error::ReservationError(
            ReservationError::RowOutOfRange { row: 0, rows: 20 }
        ))
    ));

    Ok(())
}

/// Expect a nonexistent session to fail with SessionNotFound
#[tokio::test]
async fn rejects_unknown_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let validator = SeatValidator::new(&test.db);
    let result = validator.validate(1, 3, 4, None).await;

    assert!(matches!(
        result,
        Err(Error::ReservationError(ReservationError::SessionNotFound(1)))
    ));

    Ok(())
}

/// Expect a ticket to re-validate against its own seat via the exclusion id
#[tokio::test]
async fn excludes_given_ticket_from_uniqueness_check() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let session = test.catalog().insert_session_with_dome(20, 20).await?;

    let user = test.booking().insert_user().await?;
    let reservation = test.booking().insert_reservation(user.id).await?;
    let ticket = test
        .booking()
        .insert_ticket(reservation.id, session.id, 3, 4)
        .await?;

    let validator = SeatValidator::new(&test.db);

    let result = validator.validate(session.id, 3, 4, Some(ticket.id)).await;
    assert!(result.is_ok());

    let result = validator.validate(session.id, 3, 4, None).await;
    assert!(result.is_err());

    Ok(())
}
