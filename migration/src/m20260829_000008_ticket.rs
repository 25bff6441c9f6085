use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260829_000005_show_session::ShowSession, m20260829_000007_reservation::Reservation};

static UQ_TICKET_SESSION_ROW_SEAT: &str = "uq-ticket-show_session_id-row-seat";
static FK_TICKET_SHOW_SESSION_ID: &str = "fk-ticket-show_session_id";
static FK_TICKET_RESERVATION_ID: &str = "fk-ticket-reservation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(integer(Ticket::Row))
                    .col(integer(Ticket::Seat))
                    .col(integer(Ticket::ShowSessionId))
                    .col(integer(Ticket::ReservationId))
                    .to_owned(),
            )
            .await?;

        // Race protection for concurrent bookings: whichever transaction
        // commits a (session, row, seat) triple first wins, the loser fails
        // with a unique constraint violation.
        manager
            .create_index(
                Index::create()
                    .name(UQ_TICKET_SESSION_ROW_SEAT)
                    .table(Ticket::Table)
                    .col(Ticket::ShowSessionId)
                    .col(Ticket::Row)
                    .col(Ticket::Seat)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_SHOW_SESSION_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::ShowSessionId)
                    .to_tbl(ShowSession::Table)
                    .to_col(ShowSession::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_RESERVATION_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::ReservationId)
                    .to_tbl(Reservation::Table)
                    .to_col(Reservation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_RESERVATION_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_SHOW_SESSION_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UQ_TICKET_SESSION_ROW_SEAT)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Row,
    Seat,
    ShowSessionId,
    ReservationId,
}
