pub use super::astronomy_show::Entity as AstronomyShow;
pub use super::astronomy_show_theme::Entity as AstronomyShowTheme;
pub use super::orrery_user::Entity as OrreryUser;
pub use super::planetarium_dome::Entity as PlanetariumDome;
pub use super::reservation::Entity as Reservation;
pub use super::show_session::Entity as ShowSession;
pub use super::show_theme::Entity as ShowTheme;
pub use super::ticket::Entity as Ticket;
