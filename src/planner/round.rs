//! Greedy per-round match planner.
//!
//! # Algorithm
//!
//! For each round: filter the roster by round caps, order the survivors
//! by priority (capped players first, ties shuffled), then fill courts
//! in order. Each court takes the unused remainder of the ordered pool
//! and asks the format's selector for one matchup; chosen players are
//! marked used for the round and recorded into history. A court with too
//! few remaining candidates records a shortfall and the round moves on —
//! never an error.
//!
//! The planner is greedy: each court takes the best matchup available at
//! that moment. It does not backtrack, so the result is good rather than
//! optimal.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::history::MatchupHistory;
use crate::models::{MatchFormat, Matchup, Player, Schedule, Shortfall};
use crate::selection::{eligible_players, order_by_priority, select_group, select_opponent};
use crate::validation::{validate_input, ValidationError};

/// Generates a multi-round schedule for a fixed set of courts.
///
/// All randomness flows through the `Rng` handed to [`generate`], so a
/// seeded generator reproduces a run exactly.
///
/// [`generate`]: RoundPlanner::generate
///
/// # Example
///
/// ```
/// use courtplan::models::{MatchFormat, Player};
/// use courtplan::planner::RoundPlanner;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let players = vec![
///     Player::new("Ann", 1),
///     Player::new("Ben", 2),
///     Player::new("Cal", 3),
///     Player::new("Dee", 4),
/// ];
/// let planner = RoundPlanner::new(2, 3, MatchFormat::Singles);
/// let mut rng = SmallRng::seed_from_u64(7);
/// let schedule = planner.generate(&players, &mut rng).unwrap();
/// assert_eq!(schedule.matches_in_round(1).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoundPlanner {
    courts: u32,
    rounds: u32,
    format: MatchFormat,
    grade_range: RangeInclusive<i32>,
}

impl RoundPlanner {
    /// Creates a planner with the default 1..=4 grade range.
    pub fn new(courts: u32, rounds: u32, format: MatchFormat) -> Self {
        Self {
            courts,
            rounds,
            format,
            grade_range: 1..=4,
        }
    }

    /// Sets the grade range players are validated against.
    pub fn with_grade_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.grade_range = range;
        self
    }

    /// Plans the full schedule.
    ///
    /// Rejects invalid configuration up front; an undersized pool is not
    /// invalid and shows up as shortfalls on the returned schedule.
    pub fn generate<R: Rng>(
        &self,
        players: &[Player],
        rng: &mut R,
    ) -> Result<Schedule, Vec<ValidationError>> {
        validate_input(players, self.courts, self.rounds, &self.grade_range)?;

        let per_match = self.format.players_per_match();
        let mut history = MatchupHistory::new();
        let mut schedule = Schedule::new();

        for round in 1..=self.rounds {
            let pool = eligible_players(players, round, self.rounds, &history);
            let ordered = order_by_priority(pool, round, self.rounds, &history, rng);
            let mut used: HashSet<&str> = HashSet::new();

            for court in 1..=self.courts {
                let candidates: Vec<&Player> = ordered
                    .iter()
                    .copied()
                    .filter(|p| !used.contains(p.name.as_str()))
                    .collect();
                if candidates.len() < per_match {
                    schedule.add_shortfall(Shortfall::new(round, court, per_match, candidates.len()));
                    continue;
                }

                let group: Vec<&Player> = match self.format {
                    MatchFormat::Singles => {
                        let lead = candidates[0];
                        match select_opponent(lead, &candidates[1..], &history) {
                            Some(opponent) => vec![lead, opponent],
                            None => {
                                schedule.add_shortfall(Shortfall::new(
                                    round,
                                    court,
                                    per_match,
                                    candidates.len(),
                                ));
                                continue;
                            }
                        }
                    }
                    MatchFormat::Doubles => match select_group(&candidates, &history) {
                        Some(pick) => {
                            history.mark_seen(pick.key.clone());
                            pick.players.to_vec()
                        }
                        None => {
                            schedule.add_shortfall(Shortfall::new(
                                round,
                                court,
                                per_match,
                                candidates.len(),
                            ));
                            continue;
                        }
                    },
                };

                for p in &group {
                    used.insert(p.name.as_str());
                }
                history.record(&group);
                schedule.add_matchup(Matchup::new(
                    round,
                    court,
                    group.iter().map(|p| p.name.clone()).collect(),
                ));
            }
        }

        Ok(schedule)
    }
}
