pub use sea_orm_migration::prelude::*;

mod m20260829_000001_show_theme;
mod m20260829_000002_astronomy_show;
mod m20260829_000003_astronomy_show_theme;
mod m20260829_000004_planetarium_dome;
mod m20260829_000005_show_session;
mod m20260829_000006_orrery_user;
mod m20260829_000007_reservation;
mod m20260829_000008_ticket;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_show_theme::Migration),
            Box::new(m20260829_000002_astronomy_show::Migration),
            Box::new(m20260829_000003_astronomy_show_theme::Migration),
            Box::new(m20260829_000004_planetarium_dome::Migration),
            Box::new(m20260829_000005_show_session::Migration),
            Box::new(m20260829_000006_orrery_user::Migration),
            Box::new(m20260829_000007_reservation::Migration),
            Box::new(m20260829_000008_ticket::Migration),
        ]
    }
}
