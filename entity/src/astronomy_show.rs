use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "astronomy_show")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::astronomy_show_theme::Entity")]
    AstronomyShowTheme,
    #[sea_orm(has_many = "super::show_session::Entity")]
    ShowSession,
}

impl Related<super::astronomy_show_theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomyShowTheme.def()
    }
}

impl Related<super::show_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowSession.def()
    }
}

impl Related<super::show_theme::Entity> for Entity {
    fn to() -> RelationDef {
        super::astronomy_show_theme::Relation::ShowTheme.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::astronomy_show_theme::Relation::AstronomyShow
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
