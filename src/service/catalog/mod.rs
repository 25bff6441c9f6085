//! Catalog services: show listings and session listings with seat availability.

pub mod session;
pub mod show;

pub use session::SessionService;
pub use show::ShowService;
