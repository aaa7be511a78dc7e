//! Command-line front end for a Swiss-system tournament.
//!
//! Each invocation performs one tournament operation against the database and
//! prints its result.

mod commands;
mod config;
mod logging;

use std::time::Instant;

use anyhow::{Context, Error};
use log::{error, info};
use pico_args::Arguments;
use swiss_tournament::{Database, TournamentError, TournamentStore};

use commands::{execute, parse_command};
use config::CliConfig;

const HELP: &str = "\
Manage a Swiss-system tournament

USAGE:
  swiss [OPTIONS] <COMMAND>

COMMANDS:
  migrate                  Create the players/matches tables and standings view
  check                    Verify the database is reachable
  register <NAME>          Register a player
  report <WINNER> <LOSER>  Record a match result by player ID
  count                    Print the number of registered players
  standings                Print players ordered by wins
  pairings                 Print the next round's pairings
  clear-matches            Delete all match records
  clear-players            Delete all players (clear matches first)
  reset                    Delete all matches, then all players

OPTIONS:
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/tournament]
  --json                   Print results as JSON

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  DATABASE_URL                 PostgreSQL connection string
  DB_CONNECTION_TIMEOUT_SECS   Connection timeout  [default: 10]
  DB_QUERY_TIMEOUT_SECS        Query timeout       [default: 5]
  RUST_LOG                     Log filter          [default: info,sqlx=warn]
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let json = pargs.contains("--json");
    let database_url: Option<String> = pargs.opt_value_from_str("--db-url")?;
    let free: Vec<String> = pargs
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let command = parse_command(&free)?;

    logging::init();

    let config = CliConfig::from_env(database_url, json);
    config.validate()?;

    let db = Database::new(&config.database).context("Invalid database URL")?;
    let store = TournamentStore::postgres(db.clone());

    info!("Running '{}'", command.name());
    let start = Instant::now();
    let result = execute(&command, &db, &store, config.output).await;
    logging::log_performance(command.name(), start.elapsed().as_millis() as u64, None);

    match result {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("'{}' failed: {:#}", command.name(), e);
            let summary = e
                .downcast_ref::<TournamentError>()
                .map(TournamentError::client_message)
                .unwrap_or_else(|| e.to_string());
            Err(anyhow::anyhow!("'{}' failed: {}", command.name(), summary))
        }
    }
}
