//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use swiss_tournament::DatabaseConfig;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

/// Complete CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Output format for command results
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `database_url_override` - Optional database URL override (from CLI args)
    /// * `json` - Whether `--json` was given
    pub fn from_env(database_url_override: Option<String>, json: bool) -> Self {
        let mut database = DatabaseConfig::from_env();
        if let Some(url) = database_url_override {
            database.database_url = url;
        }

        let output = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        CliConfig { database, output }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.database.database_url;
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::Invalid {
                var: "DATABASE_URL".to_string(),
                reason: "Must be a postgres:// or postgresql:// URL".to_string(),
            });
        }

        if self.database.connection_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_CONNECTION_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.database.query_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_QUERY_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database: DatabaseConfig) -> CliConfig {
        CliConfig {
            database,
            output: OutputFormat::Text,
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "DATABASE_URL".to_string(),
            reason: "Must be a postgres:// URL".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DATABASE_URL"));
        assert!(msg.contains("postgres://"));
    }

    #[test]
    fn test_override_and_json_flag() {
        let cfg = CliConfig::from_env(Some("postgres://override/tournament".to_string()), true);
        assert_eq!(cfg.database.database_url, "postgres://override/tournament");
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn test_development_config_is_valid() {
        assert!(config(DatabaseConfig::development()).validate().is_ok());
    }

    #[test]
    fn test_config_validation_rejects_other_schemes() {
        let cfg = config(DatabaseConfig {
            database_url: "mysql://localhost/tournament".to_string(),
            ..DatabaseConfig::development()
        });

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "DATABASE_URL"));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let cfg = config(DatabaseConfig {
            query_timeout_secs: 0,
            ..DatabaseConfig::development()
        });

        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "DB_QUERY_TIMEOUT_SECS"));
    }
}
