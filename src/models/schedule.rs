//! Schedule (solution) model.
//!
//! A schedule is the authoritative list of matchups produced by one
//! planning run, plus any shortfalls (courts left without a match). The
//! "by round" and "by court" views are derived from the list on demand
//! and never stored, so a mutation cannot leave the two views disagreeing.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::Matchup;

/// A complete schedule for one run.
///
/// Matchups are kept sorted by `(round, court)`; mutating code calls
/// [`Schedule::sort_canonical`] after splicing matches in or out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// All matchups, sorted by round then court.
    pub matches: Vec<Matchup>,
    /// Courts that could not be filled, in planning order.
    pub shortfalls: Vec<Shortfall>,
}

/// A court that received no matchup for lack of eligible players.
///
/// Not an error: the run continues and the condition is reported here so
/// the caller can surface a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Round number (1-based).
    pub round: u32,
    /// Court number (1-based).
    pub court: u32,
    /// Players the match format required.
    pub needed: usize,
    /// Eligible players that were still unassigned.
    pub available: usize,
    /// Human-readable description.
    pub message: String,
}

impl Shortfall {
    /// Creates a shortfall record.
    pub fn new(round: u32, court: u32, needed: usize, available: usize) -> Self {
        Self {
            round,
            court,
            needed,
            available,
            message: format!(
                "round {round}, court {court}: {needed} players needed, {available} available"
            ),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a matchup.
    pub fn add_matchup(&mut self, matchup: Matchup) {
        self.matches.push(matchup);
    }

    /// Records a shortfall.
    pub fn add_shortfall(&mut self, shortfall: Shortfall) {
        self.shortfalls.push(shortfall);
    }

    /// Whether every court received a matchup in every round.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Number of matchups.
    pub fn matchup_count(&self) -> usize {
        self.matches.len()
    }

    /// All matchups in a round, in court order.
    pub fn matches_in_round(&self, round: u32) -> Vec<&Matchup> {
        self.matches.iter().filter(|m| m.round == round).collect()
    }

    /// All matchups on a court, in round order.
    pub fn matches_on_court(&self, court: u32) -> Vec<&Matchup> {
        self.matches.iter().filter(|m| m.court == court).collect()
    }

    /// All matchups containing the named player.
    pub fn matches_for_player(&self, name: &str) -> Vec<&Matchup> {
        self.matches.iter().filter(|m| m.contains(name)).collect()
    }

    /// Derived "by round" view: round → matchups in court order.
    pub fn by_round(&self) -> BTreeMap<u32, Vec<&Matchup>> {
        let mut view: BTreeMap<u32, Vec<&Matchup>> = BTreeMap::new();
        for m in &self.matches {
            view.entry(m.round).or_default().push(m);
        }
        view
    }

    /// Derived "by court" view: court → matchups in round order.
    pub fn by_court(&self) -> BTreeMap<u32, Vec<&Matchup>> {
        let mut view: BTreeMap<u32, Vec<&Matchup>> = BTreeMap::new();
        for m in &self.matches {
            view.entry(m.court).or_default().push(m);
        }
        view
    }

    /// Distinct round numbers with at least one matchup, ascending.
    pub fn rounds(&self) -> Vec<u32> {
        self.by_round().into_keys().collect()
    }

    /// Distinct court numbers with at least one matchup, ascending.
    pub fn courts(&self) -> Vec<u32> {
        self.by_court().into_keys().collect()
    }

    /// Matches played per player, replayed from the authoritative list.
    ///
    /// Players with no matches are absent from the result.
    pub fn match_counts(&self) -> HashMap<String, u32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for m in &self.matches {
            for name in &m.players {
                *counts.entry(name.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Restores the canonical `(round, court)` ordering.
    pub fn sort_canonical(&mut self) {
        self.matches.sort_by_key(|m| (m.round, m.court));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_matchup(Matchup::new(1, 1, vec!["Ann".into(), "Ben".into()]));
        s.add_matchup(Matchup::new(1, 2, vec!["Cal".into(), "Dee".into()]));
        s.add_matchup(Matchup::new(2, 1, vec!["Ann".into(), "Cal".into()]));
        s
    }

    #[test]
    fn test_views_agree_with_match_list() {
        let s = sample_schedule();
        assert_eq!(s.matchup_count(), 3);
        assert_eq!(s.matches_in_round(1).len(), 2);
        assert_eq!(s.matches_in_round(2).len(), 1);
        assert_eq!(s.matches_on_court(1).len(), 2);
        assert_eq!(s.matches_on_court(2).len(), 1);

        let by_round = s.by_round();
        let by_court = s.by_court();
        let round_total: usize = by_round.values().map(Vec::len).sum();
        let court_total: usize = by_court.values().map(Vec::len).sum();
        assert_eq!(round_total, s.matchup_count());
        assert_eq!(court_total, s.matchup_count());
    }

    #[test]
    fn test_rounds_and_courts() {
        let s = sample_schedule();
        assert_eq!(s.rounds(), vec![1, 2]);
        assert_eq!(s.courts(), vec![1, 2]);
    }

    #[test]
    fn test_match_counts_replay() {
        let s = sample_schedule();
        let counts = s.match_counts();
        assert_eq!(counts["Ann"], 2);
        assert_eq!(counts["Ben"], 1);
        assert_eq!(counts["Cal"], 2);
        assert_eq!(counts["Dee"], 1);
    }

    #[test]
    fn test_matches_for_player() {
        let s = sample_schedule();
        let ann = s.matches_for_player("Ann");
        assert_eq!(ann.len(), 2);
        assert!(s.matches_for_player("Eve").is_empty());
    }

    #[test]
    fn test_sort_canonical() {
        let mut s = Schedule::new();
        s.add_matchup(Matchup::new(2, 1, vec!["Ann".into(), "Ben".into()]));
        s.add_matchup(Matchup::new(1, 2, vec!["Cal".into(), "Dee".into()]));
        s.add_matchup(Matchup::new(1, 1, vec!["Eve".into(), "Fay".into()]));
        s.sort_canonical();
        let order: Vec<(u32, u32)> = s.matches.iter().map(|m| (m.round, m.court)).collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_shortfall_reporting() {
        let mut s = sample_schedule();
        assert!(s.is_complete());
        s.add_shortfall(Shortfall::new(3, 2, 4, 1));
        assert!(!s.is_complete());
        assert!(s.shortfalls[0].message.contains("court 2"));
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.matchup_count(), 0);
        assert!(s.is_complete());
        assert!(s.rounds().is_empty());
        assert!(s.match_counts().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
