//! # Swiss Tournament
//!
//! Swiss-system tournament bookkeeping on top of PostgreSQL.
//!
//! Players are registered, match outcomes are reported, and standings are read
//! back from a `standings` view that aggregates the recorded matches. Pairings
//! for the next round match each player with the one adjacent to them in the
//! standings.
//!
//! ## Core Modules
//!
//! - [`tournament`]: Models, errors, the pairing pass and the [`TournamentStore`] facade
//! - [`db`]: Connection handling, timeouts, migrations and the repository seam
//! - [`sanitize`]: Pluggable cleaning of player names
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::tournament::{Standing, pairing::pair_adjacent};
//!
//! let standings = vec![
//!     Standing { id: 1, name: "A".to_string(), wins: 1, matches: 1 },
//!     Standing { id: 2, name: "B".to_string(), wins: 1, matches: 1 },
//! ];
//! let pairings = pair_adjacent(&standings);
//! assert_eq!(pairings[0].ids(), [1, 2]);
//! ```

/// Database connections, configuration and repositories.
pub mod db;

/// Text cleaning for user-supplied names.
pub mod sanitize;

/// Swiss tournament logic and data models.
pub mod tournament;

pub use db::{Database, DatabaseConfig};
pub use sanitize::{HtmlSanitizer, NameSanitizer, PassThrough};
pub use tournament::{
    Pairing, PlayerId, Standing, TournamentError, TournamentResult, TournamentStore,
};
