//! Service layer for business logic.
//!
//! Services coordinate between repositories and implement the read-side
//! catalog queries and the atomic seat-reservation flow. They hold a database
//! connection reference and construct repositories per call.

pub mod booking;
pub mod catalog;
