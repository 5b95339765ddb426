//! Per-run matchup bookkeeping.
//!
//! Tracks, for the duration of one planning run: matches played per
//! player, opponents already faced, opponent grades seen, doubles match
//! keys already used, and each player's most recent group. Selectors read
//! this state to balance grades and avoid immediate repeats; the planner
//! owns it and passes it down by reference, so nothing leaks across runs.
//!
//! In a doubles matchup all three co-participants are recorded as faced
//! opponents — teammates included — and their grades feed the opponent
//! grade statistics.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::{MatchKey, Player};

/// Mutable scheduling state for one run.
#[derive(Debug, Clone, Default)]
pub struct MatchupHistory {
    match_counts: HashMap<String, u32>,
    opponents: HashMap<String, HashSet<String>>,
    opponent_grades: HashMap<String, Vec<i32>>,
    seen_keys: HashSet<MatchKey>,
    last_groups: HashMap<String, BTreeSet<String>>,
}

impl MatchupHistory {
    /// Creates empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches the named player has played so far.
    pub fn matches_played(&self, name: &str) -> u32 {
        self.match_counts.get(name).copied().unwrap_or(0)
    }

    /// Whether `player` has already shared a matchup with `opponent`.
    pub fn has_faced(&self, player: &str, opponent: &str) -> bool {
        self.opponents
            .get(player)
            .is_some_and(|o| o.contains(opponent))
    }

    /// Grades of opponents the player has faced so far.
    pub fn grades_faced(&self, name: &str) -> &[i32] {
        self.opponent_grades
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Grade targets for pairing: the grades already faced, or the
    /// player's own grade before their first match.
    pub fn grade_targets(&self, player: &Player) -> Vec<i32> {
        match self.opponent_grades.get(&player.name) {
            Some(grades) if !grades.is_empty() => grades.clone(),
            _ => vec![player.grade],
        }
    }

    /// Whether `candidate` was in `player`'s most recent group.
    pub fn in_last_group(&self, player: &str, candidate: &str) -> bool {
        self.last_groups
            .get(player)
            .is_some_and(|g| g.contains(candidate))
    }

    /// Whether `group` is exactly `player`'s most recent group.
    pub fn was_last_group(&self, player: &str, group: &BTreeSet<String>) -> bool {
        self.last_groups.get(player) == Some(group)
    }

    /// Whether a doubles key was already used in this run.
    pub fn has_seen(&self, key: &MatchKey) -> bool {
        self.seen_keys.contains(key)
    }

    /// Marks a doubles key as used.
    pub fn mark_seen(&mut self, key: MatchKey) {
        self.seen_keys.insert(key);
    }

    /// Records a completed matchup: bumps match counts, adds every
    /// co-participant as a faced opponent, appends their grades, and
    /// replaces each member's last-group set.
    pub fn record(&mut self, group: &[&Player]) {
        let names: BTreeSet<String> = group.iter().map(|p| p.name.clone()).collect();
        for p in group {
            *self.match_counts.entry(p.name.clone()).or_insert(0) += 1;
            for other in group {
                if other.name != p.name {
                    self.opponents
                        .entry(p.name.clone())
                        .or_default()
                        .insert(other.name.clone());
                    self.opponent_grades
                        .entry(p.name.clone())
                        .or_default()
                        .push(other.grade);
                }
            }
            self.last_groups.insert(p.name.clone(), names.clone());
        }
    }
}
