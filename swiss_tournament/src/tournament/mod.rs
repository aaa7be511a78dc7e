//! Tournament module for Swiss-system play.
//!
//! This module provides:
//! - Player registration with sanitized names
//! - Match result reporting
//! - Standings derived from recorded matches
//! - Next-round pairings of adjacent-ranked players
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, DatabaseConfig};
//! use swiss_tournament::tournament::TournamentStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env())?;
//!     let store = TournamentStore::postgres(db);
//!
//!     let twilight = store.register_player("Twilight Sparkle").await?;
//!     let fluttershy = store.register_player("Fluttershy").await?;
//!     store.report_match(twilight, fluttershy).await?;
//!
//!     for pairing in store.swiss_pairings().await? {
//!         println!("{} vs {}", pairing.name1, pairing.name2);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod models;
pub mod pairing;
pub mod store;

pub use errors::{TournamentError, TournamentResult};
pub use models::{Match, Pairing, Player, PlayerId, Standing};
pub use store::TournamentStore;
