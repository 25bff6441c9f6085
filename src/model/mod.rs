//! Data transfer objects exchanged with the presentation layer.

pub mod booking;
pub mod catalog;
