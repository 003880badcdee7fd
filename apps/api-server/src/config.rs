//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Apply pending schema migrations on startup.
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database: database_from_var("DATABASE_URL"),
            auto_migrate: env::var("AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

/// Database used by the integration tests, from `TEST_DATABASE_URL`.
pub fn test_database_from_env() -> Option<DatabaseConfig> {
    database_from_var("TEST_DATABASE_URL")
}

/// Build a [`DatabaseConfig`] from the URL in `key`, with pool sizing from
/// `DB_MAX_CONNECTIONS` / `DB_MIN_CONNECTIONS` / `DB_CONNECT_TIMEOUT_SECS`.
fn database_from_var(key: &str) -> Option<DatabaseConfig> {
    let url = env::var(key).ok().filter(|url| !url.is_empty())?;
    let defaults = DatabaseConfig::new(url);

    Some(DatabaseConfig {
        max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
        min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(defaults.min_connections),
        connect_timeout: parse_var("DB_CONNECT_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout),
        ..defaults
    })
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
