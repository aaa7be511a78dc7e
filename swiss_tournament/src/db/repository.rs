//! Repository trait definitions for testability and dependency injection.
//!
//! [`TournamentRepository`] is the storage seam under
//! [`TournamentStore`](crate::tournament::TournamentStore). The PostgreSQL
//! implementation opens one connection per call and commits writes before
//! releasing it.

use async_trait::async_trait;
use sqlx::{Connection, Row};

use super::timeouts::with_timeout;
use super::{Database, release};
use crate::tournament::{Match, PlayerId, Standing, TournamentResult};

/// Trait for tournament storage operations
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Delete every match, returning the number removed
    async fn delete_matches(&self) -> TournamentResult<u64>;

    /// Delete every player, returning the number removed
    async fn delete_players(&self) -> TournamentResult<u64>;

    /// Count registered players
    async fn count_players(&self) -> TournamentResult<i64>;

    /// Insert a player with an already-sanitized name
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Fetch standings, most wins first, ties in registration order
    async fn fetch_standings(&self) -> TournamentResult<Vec<Standing>>;

    /// Insert a match record
    async fn insert_match(&self, record: &Match) -> TournamentResult<()>;
}

/// Default PostgreSQL implementation of `TournamentRepository`
#[derive(Debug, Clone)]
pub struct PgTournamentRepository {
    db: Database,
}

impl PgTournamentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Run a single statement in its own committed transaction
    async fn execute_committed(&self, sql: &'static str) -> TournamentResult<u64> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        let result = with_timeout(self.db.query_timeout(), sqlx::query(sql).execute(&mut *tx)).await?;

        tx.commit().await?;
        release(conn).await;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn delete_matches(&self) -> TournamentResult<u64> {
        self.execute_committed("DELETE FROM matches").await
    }

    async fn delete_players(&self) -> TournamentResult<u64> {
        self.execute_committed("DELETE FROM players").await
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        let mut conn = self.db.connect().await?;

        let row = with_timeout(
            self.db.query_timeout(),
            sqlx::query("SELECT COUNT(*) AS num FROM players").fetch_one(&mut conn),
        )
        .await?;

        release(conn).await;
        Ok(row.get("num"))
    }

    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        let row = with_timeout(
            self.db.query_timeout(),
            sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        release(conn).await;
        Ok(row.get("id"))
    }

    async fn fetch_standings(&self) -> TournamentResult<Vec<Standing>> {
        let mut conn = self.db.connect().await?;

        let rows = with_timeout(
            self.db.query_timeout(),
            sqlx::query(
                r#"
                SELECT id, name, wins, matches
                FROM standings
                ORDER BY wins DESC, id
                "#,
            )
            .fetch_all(&mut conn),
        )
        .await?;

        release(conn).await;

        let standings = rows
            .into_iter()
            .map(|row| Standing {
                id: row.get("id"),
                name: row.get("name"),
                wins: row.get("wins"),
                matches: row.get("matches"),
            })
            .collect();

        Ok(standings)
    }

    async fn insert_match(&self, record: &Match) -> TournamentResult<()> {
        let mut conn = self.db.connect().await?;
        let mut tx = conn.begin().await?;

        with_timeout(
            self.db.query_timeout(),
            sqlx::query("INSERT INTO matches (p1, p2, winner) VALUES ($1, $2, $3)")
                .bind(record.p1)
                .bind(record.p2)
                .bind(record.winner)
                .execute(&mut *tx),
        )
        .await?;

        tx.commit().await?;
        release(conn).await;
        Ok(())
    }
}
