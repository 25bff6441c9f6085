//! Fixture helpers for inserting test rows.
//!
//! - `catalog` - themes, shows, domes, and show sessions
//! - `booking` - users, reservations, and tickets

pub mod booking;
pub mod catalog;
