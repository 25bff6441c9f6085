pub mod prelude;

pub mod astronomy_show;
pub mod astronomy_show_theme;
pub mod orrery_user;
pub mod planetarium_dome;
pub mod reservation;
pub mod show_session;
pub mod show_theme;
pub mod ticket;
