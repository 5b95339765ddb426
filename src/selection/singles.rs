//! Singles pairing selector.
//!
//! # Algorithm
//!
//! Candidates are ranked by their minimum grade distance to the grades
//! the player has already faced (own grade before the first match — the
//! first pairing therefore targets like-graded opponents, and later
//! rounds converge on the observed opposition). The ranked list is then
//! walked through three fallback tiers:
//!
//! 1. not yet played and not in the player's most recent group
//! 2. not yet played (the immediate repeat is tolerated)
//! 3. any remaining candidate
//!
//! The sort is stable, so equal-distance candidates keep the shuffled
//! priority order and tie-breaking stays randomized.

use crate::history::MatchupHistory;
use crate::models::Player;

use super::grade_distance;

/// Picks the best opponent for `player` from `candidates`.
///
/// Returns `None` only when no candidate other than the player remains.
pub fn select_opponent<'a>(
    player: &Player,
    candidates: &[&'a Player],
    history: &MatchupHistory,
) -> Option<&'a Player> {
    let targets = history.grade_targets(player);

    let mut ranked: Vec<&'a Player> = candidates
        .iter()
        .copied()
        .filter(|c| c.name != player.name)
        .collect();
    ranked.sort_by_key(|c| {
        targets
            .iter()
            .map(|t| grade_distance(c.grade, *t))
            .min()
            .unwrap_or(0)
    });

    ranked
        .iter()
        .find(|c| {
            !history.has_faced(&player.name, &c.name) && !history.in_last_group(&player.name, &c.name)
        })
        .or_else(|| ranked.iter().find(|c| !history.has_faced(&player.name, &c.name)))
        .or_else(|| ranked.first())
        .copied()
}
