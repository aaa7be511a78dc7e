//! Deadlines for tournament database round trips
//!
//! Every connect and statement goes through [`with_timeout`], so a stalled
//! server surfaces as [`TimeoutError::Timeout`] instead of hanging the caller.
//! The durations come from [`DatabaseConfig`](super::DatabaseConfig); the
//! constants here are its fallbacks.

use std::future::Future;
use std::time::Duration;

/// Fallback deadline for a single statement
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Fallback deadline for opening a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A database call that failed or ran out of time
#[derive(Debug, thiserror::Error)]
pub enum TimeoutError {
    /// The deadline passed before the call finished
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// The call finished with an error of its own
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result of a deadline-bounded database call
pub type TimeoutResult<T> = Result<T, TimeoutError>;

/// Run a connect or query future, giving up after `duration`
///
/// # Example
///
/// ```no_run
/// use swiss_tournament::db::timeouts::{with_timeout, DEFAULT_QUERY_TIMEOUT};
/// # use sqlx::PgConnection;
/// # async fn example(conn: &mut PgConnection) -> Result<(), Box<dyn std::error::Error>> {
///
/// let row = with_timeout(
///     DEFAULT_QUERY_TIMEOUT,
///     sqlx::query("SELECT COUNT(*) FROM players").fetch_one(&mut *conn),
/// )
/// .await?;
///
/// # Ok(())
/// # }
/// ```
pub async fn with_timeout<F, T>(duration: Duration, future: F) -> TimeoutResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    tokio::time::timeout(duration, future)
        .await
        .map_err(|_| TimeoutError::Timeout(duration))?
        .map_err(TimeoutError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_give_connect_more_time() {
        assert_eq!(DEFAULT_QUERY_TIMEOUT, Duration::from_secs(5));
        assert!(DEFAULT_CONNECT_TIMEOUT > DEFAULT_QUERY_TIMEOUT);
    }

    #[test]
    fn test_timeout_error_display() {
        let err = TimeoutError::Timeout(Duration::from_secs(5));
        assert!(err.to_string().contains("timed out"));
        assert!(err.to_string().contains("5s"));
    }

    #[tokio::test]
    async fn test_result_passes_through() {
        let value = with_timeout(DEFAULT_QUERY_TIMEOUT, async { Ok::<_, sqlx::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_database_error_passes_through() {
        let err = with_timeout(DEFAULT_QUERY_TIMEOUT, async {
            Err::<(), _>(sqlx::Error::RowNotFound)
        })
        .await
        .unwrap_err();
        assert!(matches!(err, TimeoutError::Database(sqlx::Error::RowNotFound)));
    }

    #[tokio::test]
    async fn test_stalled_call_times_out() {
        let err = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, sqlx::Error>(())
        })
        .await
        .unwrap_err();
        assert!(matches!(err, TimeoutError::Timeout(d) if d == Duration::from_millis(10)));
    }
}
