//! Tournament store: player and match bookkeeping plus Swiss pairings.

use std::sync::Arc;

use super::errors::TournamentResult;
use super::models::{Match, Pairing, PlayerId, Standing};
use super::pairing::{pair_adjacent, unpaired};
use crate::db::{Database, PgTournamentRepository, TournamentRepository};
use crate::sanitize::{HtmlSanitizer, NameSanitizer};

/// Stateless facade over the tournament database
///
/// Every method is a single unit of work against the repository; nothing is
/// cached between calls.
#[derive(Clone)]
pub struct TournamentStore {
    repository: Arc<dyn TournamentRepository>,
    sanitizer: Arc<dyn NameSanitizer>,
}

impl TournamentStore {
    /// Create a store over an arbitrary repository and sanitizer
    pub fn new(
        repository: Arc<dyn TournamentRepository>,
        sanitizer: Arc<dyn NameSanitizer>,
    ) -> Self {
        Self {
            repository,
            sanitizer,
        }
    }

    /// Create a PostgreSQL-backed store that escapes markup in names
    pub fn postgres(db: Database) -> Self {
        Self::new(
            Arc::new(PgTournamentRepository::new(db)),
            Arc::new(HtmlSanitizer),
        )
    }

    /// Remove all match records
    pub async fn clear_matches(&self) -> TournamentResult<()> {
        let removed = self.repository.delete_matches().await?;
        log::info!("Cleared {} match(es)", removed);
        Ok(())
    }

    /// Remove all players
    ///
    /// Matches referencing players must be cleared first when the schema
    /// enforces foreign keys.
    pub async fn clear_players(&self) -> TournamentResult<()> {
        let removed = self.repository.delete_players().await?;
        log::info!("Cleared {} player(s)", removed);
        Ok(())
    }

    /// Number of registered players
    pub async fn count_players(&self) -> TournamentResult<i64> {
        self.repository.count_players().await
    }

    /// Register a player and return the ID assigned by the database
    ///
    /// The name is cleaned by the configured sanitizer before it is stored.
    /// Names need not be unique.
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let clean_name = self.sanitizer.clean(name);
        let id = self.repository.insert_player(&clean_name).await?;
        log::info!("Registered player {} '{}'", id, clean_name);
        Ok(id)
    }

    /// Players ordered by wins, most first
    ///
    /// Players level on wins keep registration order.
    pub async fn standings(&self) -> TournamentResult<Vec<Standing>> {
        self.repository.fetch_standings().await
    }

    /// Record the outcome of a single match
    ///
    /// Fails with [`Constraint`](super::TournamentError::Constraint) if either ID is unknown, or
    /// if both IDs name the same player.
    pub async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
        self.repository
            .insert_match(&Match::decided(winner, loser))
            .await?;
        log::info!("Recorded match: {} beat {}", winner, loser);
        Ok(())
    }

    /// Pairings for the next round
    ///
    /// Each player meets the player adjacent to them in the standings. With an
    /// odd number of players the last-ranked player sits the round out.
    pub async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.standings().await?;

        if let Some(left_out) = unpaired(&standings) {
            log::warn!(
                "Odd number of players ({}); player {} '{}' is not paired this round",
                standings.len(),
                left_out.id,
                left_out.name
            );
        }

        let pairings = pair_adjacent(&standings);
        log::debug!("Generated {} pairing(s)", pairings.len());
        Ok(pairings)
    }
}
