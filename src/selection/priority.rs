//! Eligibility filtering and priority ordering.
//!
//! Each round starts from the full roster: players are filtered by their
//! round cap, then ordered so that capped players spend their limited
//! rounds before always-available players crowd them out. Ties within a
//! priority group are broken by a uniform shuffle through the injected
//! random source, so repeated runs with identical input differ.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::history::MatchupHistory;
use crate::models::Player;

/// Sort key for court-assignment priority.
///
/// Derived ordering is the priority: capped players first, then fewer
/// rounds remaining before the cap, then fewer matches played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey {
    /// `false` for capped players, so they sort first.
    pub uncapped: bool,
    /// Rounds left before the cap, counting the current round.
    pub rounds_left: u32,
    /// Matches played so far.
    pub played: u32,
}

impl PriorityKey {
    /// Computes the key for one player in the given round.
    pub fn for_player(
        player: &Player,
        round: u32,
        total_rounds: u32,
        history: &MatchupHistory,
    ) -> Self {
        let cap = player.effective_cap(total_rounds);
        Self {
            uncapped: cap >= total_rounds,
            rounds_left: (cap + 1).saturating_sub(round),
            played: history.matches_played(&player.name),
        }
    }
}

/// Players allowed to play in `round`.
///
/// A player is eligible while their match count is below the effective
/// cap and the round number has not passed it. No side effects; ties are
/// broken later by [`order_by_priority`], not here.
pub fn eligible_players<'a>(
    players: &'a [Player],
    round: u32,
    total_rounds: u32,
    history: &MatchupHistory,
) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|p| {
            let cap = p.effective_cap(total_rounds);
            history.matches_played(&p.name) < cap && round <= cap
        })
        .collect()
}

/// Orders an eligible pool for court assignment.
///
/// Groups players by [`PriorityKey`], shuffles within each group, and
/// concatenates the groups in ascending key order.
pub fn order_by_priority<'a, R: Rng>(
    pool: Vec<&'a Player>,
    round: u32,
    total_rounds: u32,
    history: &MatchupHistory,
    rng: &mut R,
) -> Vec<&'a Player> {
    let mut groups: BTreeMap<PriorityKey, Vec<&'a Player>> = BTreeMap::new();
    for p in pool {
        groups
            .entry(PriorityKey::for_player(p, round, total_rounds, history))
            .or_default()
            .push(p);
    }

    let mut ordered = Vec::new();
    for (_, mut members) in groups {
        members.shuffle(rng);
        ordered.append(&mut members);
    }
    ordered
}
