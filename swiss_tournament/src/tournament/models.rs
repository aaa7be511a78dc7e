//! Tournament data models for Swiss-system play.

use serde::{Deserialize, Serialize};

/// Player ID type (assigned by the database)
pub type PlayerId = i32;

/// Registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Sanitized display name
    pub name: String,
}

/// Recorded match outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// First player (always the winner when reported through the store)
    pub p1: PlayerId,
    /// Second player
    pub p2: PlayerId,
    /// Winning player, equal to `p1` or `p2`
    pub winner: PlayerId,
}

impl Match {
    /// Create a match record from a reported outcome
    pub fn decided(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            p1: winner,
            p2: loser,
            winner,
        }
    }

    /// Returns true if the player took part in this match
    pub fn involves(&self, player: PlayerId) -> bool {
        self.p1 == player || self.p2 == player
    }
}

/// Per-player win/match aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player ID
    pub id: PlayerId,
    /// Player name
    pub name: String,
    /// Matches won
    pub wins: i64,
    /// Matches played
    pub matches: i64,
}

impl Standing {
    /// Returns true if `matches >= wins >= 0`
    pub fn is_consistent(&self) -> bool {
        self.wins >= 0 && self.matches >= self.wins
    }
}

/// Proposed match for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// First player ID
    pub id1: PlayerId,
    /// First player name
    pub name1: String,
    /// Second player ID
    pub id2: PlayerId,
    /// Second player name
    pub name2: String,
}

impl Pairing {
    /// Pair two adjacent standings entries
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    /// Both player IDs of the pairing
    pub fn ids(&self) -> [PlayerId; 2] {
        [self.id1, self.id2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: PlayerId, wins: i64, matches: i64) -> Standing {
        Standing {
            id,
            name: format!("Player {}", id),
            wins,
            matches,
        }
    }

    #[test]
    fn test_decided_match_puts_winner_first() {
        let m = Match::decided(3, 7);
        assert_eq!(m.p1, 3);
        assert_eq!(m.p2, 7);
        assert_eq!(m.winner, 3);
    }

    #[test]
    fn test_match_involves() {
        let m = Match::decided(1, 2);
        assert!(m.involves(1));
        assert!(m.involves(2));
        assert!(!m.involves(3));
    }

    #[test]
    fn test_standing_consistency() {
        assert!(standing(1, 0, 0).is_consistent());
        assert!(standing(1, 3, 3).is_consistent());
        assert!(!standing(1, 4, 3).is_consistent());
        assert!(!standing(1, -1, 0).is_consistent());
    }

    #[test]
    fn test_pairing_between() {
        let pairing = Pairing::between(&standing(4, 1, 1), &standing(9, 1, 1));
        assert_eq!(pairing.ids(), [4, 9]);
        assert_eq!(pairing.name1, "Player 4");
        assert_eq!(pairing.name2, "Player 9");
    }

    #[test]
    fn test_pairing_json_field_names() {
        let pairing = Pairing::between(&standing(1, 0, 0), &standing(2, 0, 0));
        let value = serde_json::to_value(&pairing).unwrap();
        assert_eq!(value["id1"], 1);
        assert_eq!(value["name2"], "Player 2");
    }
}
