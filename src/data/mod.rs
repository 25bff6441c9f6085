//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain (catalog and booking). Each repository is generic over
//! the connection so it runs against either a plain [`sea_orm::DatabaseConnection`]
//! or a [`sea_orm::DatabaseTransaction`] when transactional behavior is needed.

pub mod booking;
pub mod catalog;
