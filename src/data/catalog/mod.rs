//! Repositories for the show catalog: themes, domes, shows, and sessions.

pub mod dome;
pub mod session;
pub mod show;
pub mod theme;

pub use dome::DomeRepository;
pub use session::SessionRepository;
pub use show::ShowRepository;
pub use theme::ThemeRepository;
