//! Test context structure and fixture accessors.

use sea_orm::{Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{booking::BookingFixtures, catalog::CatalogFixtures},
};

/// Test context returned by [`TestBuilder`](crate::TestBuilder).
///
/// Provides an in-memory SQLite database plus fixture helpers for inserting
/// catalog and booking rows.
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_booking_tables().build().await?;
///
/// let dome = test.catalog().insert_dome("Main Dome", 20, 20).await?;
/// let user = test.booking().insert_user().await?;
/// ```
pub struct TestContext {
    /// Database connection to an in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Fixture helpers for themes, shows, domes, and sessions
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures::new(&self.db)
    }

    /// Fixture helpers for users, reservations, and tickets
    pub fn booking(&self) -> BookingFixtures<'_> {
        BookingFixtures::new(&self.db)
    }
}
