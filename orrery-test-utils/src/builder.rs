//! Declarative test environment builder.
//!
//! `TestBuilder` queues schema statements and executes them during `build()`,
//! yielding a [`TestContext`] with an in-memory SQLite database.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Chain configuration methods and finalize with `build()`. Table schemas are
/// derived from the entity definitions; the ticket unique index matching the
/// production migration is created alongside the booking tables so uniqueness
/// races behave the same under test.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    include_booking_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            include_booking_tables: false,
        }
    }

    /// Add the full booking schema to the test database.
    ///
    /// Creates every table of the backend (themes, shows, domes, sessions,
    /// users, reservations, tickets) plus the unique index on ticket
    /// (show_session_id, row, seat).
    pub fn with_booking_tables(mut self) -> Self {
        self.include_booking_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating all queued tables and indexes.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = self.tables;
        let mut indexes = self.indexes;

        if self.include_booking_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);

            // Creation order satisfies foreign key references
            tables.splice(
                0..0,
                [
                    schema.create_table_from_entity(entity::prelude::ShowTheme),
                    schema.create_table_from_entity(entity::prelude::AstronomyShow),
                    schema.create_table_from_entity(entity::prelude::AstronomyShowTheme),
                    schema.create_table_from_entity(entity::prelude::PlanetariumDome),
                    schema.create_table_from_entity(entity::prelude::ShowSession),
                    schema.create_table_from_entity(entity::prelude::OrreryUser),
                    schema.create_table_from_entity(entity::prelude::Reservation),
                    schema.create_table_from_entity(entity::prelude::Ticket),
                ],
            );

            indexes.push(
                Index::create()
                    .name("uq-ticket-show_session_id-row-seat")
                    .table(entity::ticket::Entity)
                    .col(entity::ticket::Column::ShowSessionId)
                    .col(entity::ticket::Column::Row)
                    .col(entity::ticket::Column::Seat)
                    .unique()
                    .to_owned(),
            );
        }

        for stmt in &tables {
            context.db.execute(stmt).await?;
        }

        for stmt in &indexes {
            context.db.execute(stmt).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
