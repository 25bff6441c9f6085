use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planetarium_dome")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl Model {
    /// Total number of seats in the dome's rows x seats-in-row grid.
    pub fn capacity(&self) -> i32 {
        self.rows * self.seats_in_row
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show_session::Entity")]
    ShowSession,
}

impl Related<super::show_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
