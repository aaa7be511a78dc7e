//! Database module providing per-call PostgreSQL connections and utilities.
//!
//! Every tournament operation opens its own connection, runs, and releases it.
//! Nothing is pooled and no transaction outlives the call that started it.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};

use crate::tournament::{TournamentError, TournamentResult};
use timeouts::{TimeoutError, with_timeout};

pub mod config;
pub mod repository;
pub mod timeouts;

pub use config::DatabaseConfig;
pub use repository::{PgTournamentRepository, TournamentRepository};

/// Connection factory for the tournament database
#[derive(Debug, Clone)]
pub struct Database {
    options: PgConnectOptions,
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl Database {
    /// Create a connection factory from configuration
    ///
    /// No connection is opened here; the URL is only parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiss_tournament::db::{Database, DatabaseConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let db = Database::new(&DatabaseConfig::from_env())?;
    ///     db.health_check().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::from_str(&config.database_url)?
            .log_statements(log::LevelFilter::Debug);

        Ok(Self {
            options,
            connect_timeout: config.connection_timeout(),
            query_timeout: config.query_timeout(),
        })
    }

    /// Timeout applied to each query
    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Open a fresh connection
    ///
    /// Any failure to reach the server, including authentication, is reported
    /// as [`TournamentError::Connection`].
    pub async fn connect(&self) -> TournamentResult<PgConnection> {
        match with_timeout(self.connect_timeout, self.options.connect()).await {
            Ok(conn) => Ok(conn),
            Err(TimeoutError::Timeout(duration)) => Err(TournamentError::Timeout(duration)),
            Err(TimeoutError::Database(e)) => Err(TournamentError::Connection(e)),
        }
    }

    /// Check if the database is reachable
    pub async fn health_check(&self) -> TournamentResult<()> {
        let mut conn = self.connect().await?;
        with_timeout(self.query_timeout, sqlx::query("SELECT 1").execute(&mut conn)).await?;
        release(conn).await;
        Ok(())
    }

    /// Apply the bundled schema migrations
    pub async fn run_migrations(&self) -> TournamentResult<()> {
        let mut conn = self.connect().await?;
        sqlx::migrate!("./migrations").run(&mut conn).await?;
        release(conn).await;
        log::info!("Tournament schema is up to date");
        Ok(())
    }
}

/// Close a connection once its work is done
///
/// The work has already been committed or read at this point, so a failed close
/// is logged rather than reported.
pub(crate) async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        log::debug!("Failed to close database connection cleanly: {}", e);
    }
}
