//! Doubles group selector.
//!
//! # Algorithm
//!
//! Enumerates every 4-player subset of the candidate pool (four nested
//! index loops, O(n⁴)) and, for each subset, the three distinct ways to
//! split it into two teams of 2. Each split is scored by the absolute
//! difference of the team grade averages; the minimum-difference split
//! wins. The primary pass skips splits whose [`MatchKey`] was already
//! used this run and subsets identical to any member's most recent
//! group. If that filters everything out, a fallback pass re-runs the
//! search without the repeat filters so a court is never dropped just
//! because combinations were exhausted.
//!
//! Candidate pools are bounded by roster validation, which keeps the
//! quartic enumeration cheap.

use std::collections::BTreeSet;

use crate::history::MatchupHistory;
use crate::models::{MatchKey, Player};

/// The three 2+2 splits of a 4-player subset, as index pairs.
const SPLITS: [[usize; 4]; 3] = [[0, 1, 2, 3], [0, 2, 1, 3], [0, 3, 1, 2]];

/// A chosen doubles grouping: four players in team order (first two vs
/// last two) and the key to record as seen.
#[derive(Debug, Clone)]
pub struct GroupPick<'a> {
    /// Team-ordered players.
    pub players: [&'a Player; 4],
    /// Canonical key of the chosen split.
    pub key: MatchKey,
}

/// Searches `candidates` for the best-balanced 4-player grouping.
///
/// Returns `None` only when fewer than 4 candidates remain.
pub fn select_group<'a>(
    candidates: &[&'a Player],
    history: &MatchupHistory,
) -> Option<GroupPick<'a>> {
    best_split(candidates, history, true).or_else(|| best_split(candidates, history, false))
}

fn best_split<'a>(
    candidates: &[&'a Player],
    history: &MatchupHistory,
    respect_history: bool,
) -> Option<GroupPick<'a>> {
    let mut best: Option<(f64, GroupPick<'a>)> = None;

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            for k in (j + 1)..candidates.len() {
                for l in (k + 1)..candidates.len() {
                    let subset = [candidates[i], candidates[j], candidates[k], candidates[l]];

                    if respect_history {
                        let group: BTreeSet<String> =
                            subset.iter().map(|p| p.name.clone()).collect();
                        if subset.iter().any(|p| history.was_last_group(&p.name, &group)) {
                            continue;
                        }
                    }

                    for split in &SPLITS {
                        let team1 = (subset[split[0]], subset[split[1]]);
                        let team2 = (subset[split[2]], subset[split[3]]);
                        let key = MatchKey::doubles(
                            (team1.0.name.as_str(), team1.1.name.as_str()),
                            (team2.0.name.as_str(), team2.1.name.as_str()),
                        );
                        if respect_history && history.has_seen(&key) {
                            continue;
                        }

                        let avg1 = (team1.0.grade + team1.1.grade) as f64 / 2.0;
                        let avg2 = (team2.0.grade + team2.1.grade) as f64 / 2.0;
                        let diff = (avg1 - avg2).abs();

                        if best.as_ref().is_none_or(|(d, _)| diff < *d) {
                            best = Some((
                                diff,
                                GroupPick {
                                    players: [team1.0, team1.1, team2.0, team2.1],
                                    key,
                                },
                            ));
                        }
                    }
                }
            }
        }
    }

    best.map(|(_, pick)| pick)
}
