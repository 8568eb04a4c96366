use std::env;

/// Server settings loaded from environment variables
///
/// The connection string carries the backing store's address and
/// credentials; the listen port defaults to 3000.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub database_url: String,
    pub port: u16,
}

impl ServerSettings {
    /// Load settings from environment variables
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://items.db?mode=rwc".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self { database_url, port }
    }
}
