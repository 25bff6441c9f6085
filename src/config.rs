//! Environment-based application configuration.

/// Application configuration loaded from environment variables.
pub struct Config {
    /// Connection string for the backing relational database.
    pub database_url: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// Callers embedding this crate typically load a `.env` file via `dotenvy`
    /// before calling this.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
        })
    }
}
