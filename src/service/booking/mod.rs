//! Booking services: seat validation and atomic reservation creation.

pub mod reservation;
pub mod validator;

pub use reservation::ReservationService;
pub use validator::SeatValidator;
