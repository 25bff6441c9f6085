use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "show_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub astronomy_show_id: i32,
    pub planetarium_dome_id: i32,
    pub show_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::astronomy_show::Entity",
        from = "Column::AstronomyShowId",
        to = "super::astronomy_show::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AstronomyShow,
    #[sea_orm(
        belongs_to = "super::planetarium_dome::Entity",
        from = "Column::PlanetariumDomeId",
        to = "super::planetarium_dome::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PlanetariumDome,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::astronomy_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomyShow.def()
    }
}

impl Related<super::planetarium_dome::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetariumDome.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
