//! Repositories for users, reservations, and tickets.

pub mod reservation;
pub mod ticket;
pub mod user;

pub use reservation::ReservationRepository;
pub use ticket::TicketRepository;
pub use user::UserRepository;
