//! Targeted regeneration of one round or one court.
//!
//! # Algorithm
//!
//! Both operations follow the same shape: collect the target's matchups
//! in canonical order, remember each slot's size, flatten the players
//! into a pool, uniform-shuffle the pool, and re-deal it into the slots.
//! The rebuilt matchups replace the originals in the authoritative list,
//! which is then re-sorted — the by-round and by-court views are derived
//! from that list, so they cannot fall out of sync.
//!
//! Structure is preserved (same match count, same sizes per slot);
//! content is intentionally randomized on every call. Failures are
//! all-or-nothing: the schedule is untouched unless the rebuild
//! succeeds.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Matchup, Schedule};

/// Errors from targeted regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReshuffleError {
    /// The requested round has no matchups.
    RoundNotFound(u32),
    /// The requested court has no matchups.
    CourtNotFound(u32),
    /// The extracted pool cannot refill the target's slots.
    NotEnoughPlayers {
        /// Players the slots require in total.
        needed: usize,
        /// Players extracted from the target.
        available: usize,
    },
}

impl fmt::Display for ReshuffleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReshuffleError::RoundNotFound(round) => {
                write!(f, "round {round} has no matches to reshuffle")
            }
            ReshuffleError::CourtNotFound(court) => {
                write!(f, "court {court} has no matches to reshuffle")
            }
            ReshuffleError::NotEnoughPlayers { needed, available } => {
                write!(f, "not enough eligible players: {needed} needed, {available} available")
            }
        }
    }
}

impl std::error::Error for ReshuffleError {}

/// Rebuilds one round's matchups from a reshuffled player pool.
///
/// Every court keeps its original match size; only who plays whom
/// changes. Match counts and statistics stay consistent because they
/// are derived from the match list by replay, never stored.
pub fn reshuffle_round<R: Rng>(
    schedule: &mut Schedule,
    round: u32,
    rng: &mut R,
) -> Result<(), ReshuffleError> {
    let targets = schedule.matches_in_round(round);
    if targets.is_empty() {
        return Err(ReshuffleError::RoundNotFound(round));
    }

    let slots: Vec<(u32, usize)> = targets.iter().map(|m| (m.court, m.players.len())).collect();
    let pool: Vec<String> = targets
        .iter()
        .flat_map(|m| m.players.iter().cloned())
        .collect();

    let dealt = deal(pool, &slots, rng)?;
    let rebuilt: Vec<Matchup> = slots
        .iter()
        .zip(dealt)
        .map(|(&(court, _), players)| Matchup::new(round, court, players))
        .collect();

    schedule.matches.retain(|m| m.round != round);
    schedule.matches.extend(rebuilt);
    schedule.sort_canonical();
    Ok(())
}

/// Rebuilds one court's matchups across all rounds from a reshuffled
/// player pool.
///
/// Every round keeps its original match size on that court.
pub fn reshuffle_court<R: Rng>(
    schedule: &mut Schedule,
    court: u32,
    rng: &mut R,
) -> Result<(), ReshuffleError> {
    let targets = schedule.matches_on_court(court);
    if targets.is_empty() {
        return Err(ReshuffleError::CourtNotFound(court));
    }

    let slots: Vec<(u32, usize)> = targets.iter().map(|m| (m.round, m.players.len())).collect();
    let pool: Vec<String> = targets
        .iter()
        .flat_map(|m| m.players.iter().cloned())
        .collect();

    let dealt = deal(pool, &slots, rng)?;
    let rebuilt: Vec<Matchup> = slots
        .iter()
        .zip(dealt)
        .map(|(&(round, _), players)| Matchup::new(round, court, players))
        .collect();

    schedule.matches.retain(|m| m.court != court);
    schedule.matches.extend(rebuilt);
    schedule.sort_canonical();
    Ok(())
}

/// Shuffle attempts before giving up on a duplicate-free deal.
const DEAL_ATTEMPTS: usize = 16;

/// Shuffles the pool and splits it into chunks matching the slot sizes,
/// keeping each chunk free of duplicate names.
///
/// A court's pool holds one entry per round a player appears in, so the
/// same name can occur several times; a name may never occur twice
/// within one chunk. Each attempt reshuffles and deals greedily, pushing
/// surplus copies toward later chunks.
fn deal<R: Rng>(
    mut pool: Vec<String>,
    slots: &[(u32, usize)],
    rng: &mut R,
) -> Result<Vec<Vec<String>>, ReshuffleError> {
    let needed: usize = slots.iter().map(|&(_, size)| size).sum();
    if pool.len() < needed {
        return Err(ReshuffleError::NotEnoughPlayers {
            needed,
            available: pool.len(),
        });
    }

    for _ in 0..DEAL_ATTEMPTS {
        pool.shuffle(rng);
        if let Some(chunks) = try_deal(&pool, slots) {
            return Ok(chunks);
        }
    }
    Err(ReshuffleError::NotEnoughPlayers {
        needed,
        available: pool.len(),
    })
}

fn try_deal(pool: &[String], slots: &[(u32, usize)]) -> Option<Vec<Vec<String>>> {
    let mut remaining: Vec<&String> = pool.iter().collect();
    let mut chunks = Vec::with_capacity(slots.len());
    for &(_, size) in slots {
        let mut chunk: Vec<String> = Vec::with_capacity(size);
        let mut i = 0;
        while chunk.len() < size && i < remaining.len() {
            if chunk.contains(remaining[i]) {
                i += 1;
            } else {
                chunk.push(remaining.remove(i).clone());
            }
        }
        if chunk.len() < size {
            return None;
        }
        chunks.push(chunk);
    }
    Some(chunks)
}
