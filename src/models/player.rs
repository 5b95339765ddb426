//! Player (participant) model.
//!
//! A player is one participant in a scheduling run: a unique name, an
//! integer skill grade, and an optional cap on how many rounds they play.

use serde::{Deserialize, Serialize};

/// A participant in a scheduling run.
///
/// Grades use a small integer range fixed for the run (default 1..=4,
/// 1 = strongest). The record itself never accumulates state — match
/// counts and opponent history are tracked externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player name.
    pub name: String,
    /// Skill grade.
    pub grade: i32,
    /// Maximum number of rounds this player may appear in.
    /// `None` = may play every round.
    pub round_cap: Option<u32>,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, grade: i32) -> Self {
        Self {
            name: name.into(),
            grade,
            round_cap: None,
        }
    }

    /// Sets the round cap.
    pub fn with_round_cap(mut self, cap: u32) -> Self {
        self.round_cap = Some(cap);
        self
    }

    /// The cap actually in force for a run of `total_rounds` rounds.
    #[inline]
    pub fn effective_cap(&self, total_rounds: u32) -> u32 {
        self.round_cap.unwrap_or(total_rounds)
    }

    /// Whether the cap restricts this player below the full run length.
    #[inline]
    pub fn is_capped(&self, total_rounds: u32) -> bool {
        self.effective_cap(total_rounds) < total_rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_builder() {
        let p = Player::new("Ann", 2).with_round_cap(3);
        assert_eq!(p.name, "Ann");
        assert_eq!(p.grade, 2);
        assert_eq!(p.round_cap, Some(3));
    }

    #[test]
    fn test_effective_cap_defaults_to_total_rounds() {
        let p = Player::new("Ben", 1);
        assert_eq!(p.effective_cap(5), 5);
        assert!(!p.is_capped(5));
    }

    #[test]
    fn test_effective_cap_with_limit() {
        let p = Player::new("Cal", 4).with_round_cap(2);
        assert_eq!(p.effective_cap(5), 2);
        assert!(p.is_capped(5));
        // A cap equal to the run length is not a restriction
        let q = Player::new("Dee", 3).with_round_cap(5);
        assert!(!q.is_capped(5));
    }
}
