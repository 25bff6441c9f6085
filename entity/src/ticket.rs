use sea_orm::entity::prelude::*;

/// A single seat assignment within a show session.
///
/// The (show_session_id, row, seat) triple carries a unique index at the
/// database level; the reservation service relies on it to resolve races
/// between concurrent bookings for the same seat.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub show_session_id: i32,
    pub reservation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::show_session::Entity",
        from = "Column::ShowSessionId",
        to = "super::show_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ShowSession,
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
}

impl Related<super::show_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowSession.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
