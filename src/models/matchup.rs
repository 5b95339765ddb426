//! Matchup model and the doubles repeat-detection key.
//!
//! A matchup records which players meet on which court in which round.
//! Players are referenced by name; grades are joined back from the roster
//! when statistics are computed.

use serde::{Deserialize, Serialize};

/// Match format for a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchFormat {
    /// 1v1, two players per matchup.
    Singles,
    /// 2v2, four players per matchup.
    Doubles,
}

impl MatchFormat {
    /// Number of players a single matchup consumes.
    #[inline]
    pub fn players_per_match(&self) -> usize {
        match self {
            MatchFormat::Singles => 2,
            MatchFormat::Doubles => 4,
        }
    }
}

/// One scheduled match.
///
/// `players` holds 2 names (singles) or 4 names (doubles). For doubles
/// the first two names are one team and the last two the other. Round
/// and court numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    /// Round number (1-based).
    pub round: u32,
    /// Court number (1-based).
    pub court: u32,
    /// Player names, team-ordered for doubles.
    pub players: Vec<String>,
}

impl Matchup {
    /// Creates a new matchup.
    pub fn new(round: u32, court: u32, players: Vec<String>) -> Self {
        Self {
            round,
            court,
            players,
        }
    }

    /// Whether the named player appears in this matchup.
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    /// Whether this is a 4-player matchup.
    #[inline]
    pub fn is_doubles(&self) -> bool {
        self.players.len() == 4
    }

    /// The two teams of a doubles matchup. `None` for singles.
    pub fn teams(&self) -> Option<(&[String], &[String])> {
        if self.is_doubles() {
            Some((&self.players[0..2], &self.players[2..4]))
        } else {
            None
        }
    }

    /// The canonical repeat-detection key. `None` for singles.
    pub fn key(&self) -> Option<MatchKey> {
        if self.is_doubles() {
            Some(MatchKey::doubles(
                (self.players[0].as_str(), self.players[1].as_str()),
                (self.players[2].as_str(), self.players[3].as_str()),
            ))
        } else {
            None
        }
    }
}

/// Canonical representation of a doubles matchup: the unordered pair of
/// unordered 2-player teams. Used to detect repeat pairings within a run.
///
/// # Example
///
/// ```
/// use courtplan::models::MatchKey;
///
/// let a = MatchKey::doubles(("Ann", "Ben"), ("Cal", "Dee"));
/// let b = MatchKey::doubles(("Dee", "Cal"), ("Ben", "Ann"));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    teams: [[String; 2]; 2],
}

impl MatchKey {
    /// Builds a key from two teams, normalizing player order within each
    /// team and team order within the key.
    pub fn doubles(team_a: (&str, &str), team_b: (&str, &str)) -> Self {
        let mut a = [team_a.0.to_string(), team_a.1.to_string()];
        a.sort();
        let mut b = [team_b.0.to_string(), team_b.1.to_string()];
        b.sort();
        let mut teams = [a, b];
        teams.sort();
        Self { teams }
    }

    /// The normalized teams.
    pub fn teams(&self) -> &[[String; 2]; 2] {
        &self.teams
    }
}
