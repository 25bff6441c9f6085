//! Error types for the Orrery backend.
//!
//! A single crate-level [`Error`] aggregates the reservation domain errors and
//! external library errors, using `thiserror`'s `#[from]` attribute so the `?`
//! operator converts underlying errors automatically. The presentation layer
//! maps [`ReservationError`] variants to client-error responses and everything
//! else to a generic server error.

pub mod reservation;

use thiserror::Error;

pub use reservation::ReservationError;

/// Main error type for the Orrery backend.
#[derive(Error, Debug)]
pub enum Error {
    /// Reservation error (seat bounds, taken seats, empty requests).
    #[error(transparent)]
    ReservationError(#[from] ReservationError),
    /// Internal error indicating a bug in Orrery's code.
    ///
    /// This error should never occur in normal operation, for example a
    /// foreign key pointing at a row that no longer exists.
    #[error("Internal error with Orrery's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations
    /// not modeled as reservation errors).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
