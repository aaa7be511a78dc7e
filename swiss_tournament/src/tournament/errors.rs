//! Tournament error types.

use std::time::Duration;

use thiserror::Error;

use crate::db::timeouts::TimeoutError;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// A write referenced a player that does not exist, or broke a schema check
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The store could not be reached
    #[error("Connection error: {0}")]
    Connection(sqlx::Error),

    /// A connection or query exceeded its deadline
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Schema migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Any other database error
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl TournamentError {
    /// Get a client-safe error message that doesn't leak SQL details
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Constraint(_) => {
                "Unknown player, or player still referenced by matches".to_string()
            }
            TournamentError::Connection(_) => "Tournament database unavailable".to_string(),
            TournamentError::Database(_) | TournamentError::Migration(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Returns true if the error means the store was unreachable
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            TournamentError::Connection(_) | TournamentError::Timeout(_)
        )
    }
}

impl From<sqlx::Error> for TournamentError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() || db.is_check_violation() {
                return TournamentError::Constraint(db.message().to_string());
            }
        }

        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => TournamentError::Connection(err),
            other => TournamentError::Database(other),
        }
    }
}

impl From<TimeoutError> for TournamentError {
    fn from(err: TimeoutError) -> Self {
        match err {
            TimeoutError::Timeout(duration) => TournamentError::Timeout(duration),
            TimeoutError::Database(e) => e.into(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TournamentError::from(sqlx::Error::Io(io));
        assert!(matches!(err, TournamentError::Connection(_)));
        assert!(err.is_connection());
    }

    #[test]
    fn test_row_not_found_is_database() {
        let err = TournamentError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, TournamentError::Database(_)));
        assert!(!err.is_connection());
    }

    #[test]
    fn test_timeout_conversion() {
        let err = TournamentError::from(TimeoutError::Timeout(Duration::from_secs(5)));
        assert!(matches!(err, TournamentError::Timeout(d) if d.as_secs() == 5));
        assert!(err.is_connection());
    }

    #[test]
    fn test_timeout_wrapped_database_error_is_classified() {
        let err = TournamentError::from(TimeoutError::Database(sqlx::Error::PoolClosed));
        assert!(matches!(err, TournamentError::Connection(_)));
    }

    #[test]
    fn test_client_message_hides_details() {
        let err = TournamentError::Constraint(
            "insert or update on table \"matches\" violates foreign key constraint".to_string(),
        );
        assert!(err.client_message().starts_with("Unknown player"));
        assert!(!err.client_message().contains("foreign key"));

        let err = TournamentError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.client_message(), "Internal server error");

        let err = TournamentError::Timeout(std::time::Duration::from_secs(5));
        assert!(err.client_message().contains("timed out"));
    }
}
