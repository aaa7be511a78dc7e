//! Database configuration module.
//!
//! Provides configuration structures for per-call connection management.

use std::env;
use std::time::Duration;

use super::timeouts::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_QUERY_TIMEOUT};

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,

    /// Timeout applied to every query in seconds
    pub query_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `DATABASE_URL`: PostgreSQL connection string (default: development URL)
    /// - `DB_CONNECTION_TIMEOUT_SECS`: Connection timeout in seconds (default: 10)
    /// - `DB_QUERY_TIMEOUT_SECS`: Query timeout in seconds (default: 5)
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::development();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            connection_timeout_secs: parse_env_or(
                "DB_CONNECTION_TIMEOUT_SECS",
                defaults.connection_timeout_secs,
            ),
            query_timeout_secs: parse_env_or("DB_QUERY_TIMEOUT_SECS", defaults.query_timeout_secs),
        }
    }

    /// Create a default configuration for development
    ///
    /// Uses `postgres://postgres@localhost/tournament` as the database URL
    pub fn development() -> Self {
        Self {
            database_url: "postgres://postgres@localhost/tournament".to_string(),
            connection_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs(),
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT.as_secs(),
        }
    }

    /// Connection timeout as a `Duration`
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Query timeout as a `Duration`
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::development()
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = DatabaseConfig::development();
        assert_eq!(
            config.database_url,
            "postgres://postgres@localhost/tournament"
        );
        assert_eq!(config.connection_timeout(), Duration::from_secs(10));
        assert_eq!(config.query_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(DatabaseConfig::default(), DatabaseConfig::development());
    }

    #[test]
    fn test_parse_env_or_falls_back() {
        let value: u64 = parse_env_or("SWISS_TOURNAMENT_UNSET_TEST_VARIABLE", 42);
        assert_eq!(value, 42);
    }
}
