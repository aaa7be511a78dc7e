//! Command parsing, execution and output rendering.

use serde_json::json;
use swiss_tournament::{Database, Pairing, PlayerId, Standing, TournamentStore};

use crate::config::OutputFormat;

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No command was given.
    #[error("No command given. Run with --help to see available commands")]
    MissingCommand,
    /// Command requires an argument that was not supplied.
    #[error("'{command}' requires {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    /// Player ID is not a number.
    #[error("Invalid player ID '{0}'. Must be a number (e.g., 'report 3 7')")]
    InvalidPlayerId(String),
    /// Extra arguments after a complete command.
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
    /// Unrecognized command.
    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),
}

/// A single tournament operation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Migrate,
    Check,
    Register(String),
    Report { winner: PlayerId, loser: PlayerId },
    Count,
    Standings,
    Pairings,
    ClearMatches,
    ClearPlayers,
    Reset,
}

impl Command {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Migrate => "migrate",
            Command::Check => "check",
            Command::Register(_) => "register",
            Command::Report { .. } => "report",
            Command::Count => "count",
            Command::Standings => "standings",
            Command::Pairings => "pairings",
            Command::ClearMatches => "clear-matches",
            Command::ClearPlayers => "clear-players",
            Command::Reset => "reset",
        }
    }
}

/// Parse the free (non-option) arguments into a command.
///
/// `register` joins every remaining word into the player name, so quoting is
/// optional.
pub fn parse_command(args: &[String]) -> Result<Command, ParseError> {
    let (name, rest) = args.split_first().ok_or(ParseError::MissingCommand)?;

    let command = match name.as_str() {
        "register" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "register",
                    what: "a player name",
                });
            }
            return Ok(Command::Register(rest.join(" ")));
        }
        "report" => {
            let [winner, loser, extra @ ..] = rest else {
                return Err(ParseError::MissingArgument {
                    command: "report",
                    what: "a winner ID and a loser ID",
                });
            };
            if let Some(arg) = extra.first() {
                return Err(ParseError::UnexpectedArgument(arg.clone()));
            }
            return Ok(Command::Report {
                winner: parse_player_id(winner)?,
                loser: parse_player_id(loser)?,
            });
        }
        "migrate" => Command::Migrate,
        "check" => Command::Check,
        "count" => Command::Count,
        "standings" => Command::Standings,
        "pairings" => Command::Pairings,
        "clear-matches" => Command::ClearMatches,
        "clear-players" => Command::ClearPlayers,
        "reset" => Command::Reset,
        other => return Err(ParseError::UnrecognizedCommand(other.to_string())),
    };

    match rest.first() {
        Some(arg) => Err(ParseError::UnexpectedArgument(arg.clone())),
        None => Ok(command),
    }
}

fn parse_player_id(value: &str) -> Result<PlayerId, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidPlayerId(value.to_string()))
}

/// Run a command against the store and render its result
pub async fn execute(
    command: &Command,
    db: &Database,
    store: &TournamentStore,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let output = match command {
        Command::Migrate => {
            db.run_migrations().await?;
            message(format, "Schema is up to date")
        }
        Command::Check => {
            db.health_check().await?;
            message(format, "Database is reachable")
        }
        Command::Register(name) => {
            let id = store.register_player(name).await?;
            match format {
                OutputFormat::Json => json!({ "id": id }).to_string(),
                OutputFormat::Text => format!("Registered player {}", id),
            }
        }
        Command::Report { winner, loser } => {
            store.report_match(*winner, *loser).await?;
            match format {
                OutputFormat::Json => json!({ "winner": winner, "loser": loser }).to_string(),
                OutputFormat::Text => format!("Recorded match: {} beat {}", winner, loser),
            }
        }
        Command::Count => {
            let count = store.count_players().await?;
            match format {
                OutputFormat::Json => json!({ "players": count }).to_string(),
                OutputFormat::Text => count.to_string(),
            }
        }
        Command::Standings => {
            let standings = store.standings().await?;
            match format {
                OutputFormat::Json => serde_json::to_string_pretty(&standings)?,
                OutputFormat::Text => render_standings(&standings),
            }
        }
        Command::Pairings => {
            let pairings = store.swiss_pairings().await?;
            match format {
                OutputFormat::Json => serde_json::to_string_pretty(&pairings)?,
                OutputFormat::Text => render_pairings(&pairings),
            }
        }
        Command::ClearMatches => {
            store.clear_matches().await?;
            message(format, "Cleared all matches")
        }
        Command::ClearPlayers => {
            store.clear_players().await?;
            message(format, "Cleared all players")
        }
        Command::Reset => {
            store.clear_matches().await?;
            store.clear_players().await?;
            message(format, "Cleared all matches and players")
        }
    };

    Ok(output)
}

fn message(format: OutputFormat, text: &str) -> String {
    match format {
        OutputFormat::Json => json!({ "status": "ok", "message": text }).to_string(),
        OutputFormat::Text => text.to_string(),
    }
}

/// Render standings as an aligned text table
pub fn render_standings(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return "No players registered".to_string();
    }

    let width = name_width(standings.iter().map(|s| s.name.as_str()));
    let mut out = format!(
        "{:>4}  {:>6}  {:<width$}  {:>4}  {:>7}\n",
        "Rank", "ID", "Name", "Wins", "Matches"
    );
    for (rank, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<width$}  {:>4}  {:>7}\n",
            rank + 1,
            s.id,
            s.name,
            s.wins,
            s.matches
        ));
    }
    out.pop();
    out
}

/// Render pairings one per line
pub fn render_pairings(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings (fewer than two players)".to_string();
    }

    let width = name_width(pairings.iter().map(|p| p.name1.as_str()));
    pairings
        .iter()
        .enumerate()
        .map(|(table, p)| {
            format!(
                "Table {:>2}: {:<width$} (#{})  vs  {} (#{})",
                table + 1,
                p.name1,
                p.id1,
                p.name2,
                p.id2
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(4)
}
