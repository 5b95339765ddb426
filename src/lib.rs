//! Court scheduling engine.
//!
//! Produces multi-round playing schedules for a fixed set of courts:
//! grade-balanced singles pairings or doubles groupings, priority
//! handling for players with limited rounds, and targeted reshuffle of
//! a single round or court without disturbing the rest of the schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Player`, `Matchup`, `MatchFormat`,
//!   `MatchKey`, `Schedule`, `Shortfall`
//! - **`history`**: Per-run bookkeeping of matches, opponents, and seen
//!   groupings
//! - **`selection`**: Eligibility, priority ordering, and the singles /
//!   doubles selectors
//! - **`planner`**: Round-by-round orchestration and schedule statistics
//! - **`reshuffle`**: In-place regeneration of one round or one court
//! - **`validation`**: Input integrity checks (duplicate names, grade
//!   range, round caps)
//!
//! # Architecture
//!
//! The engine is a pure computation library: no I/O, no persistence, no
//! shared state. Each planning run owns its history for the duration of
//! one call. All randomness flows through caller-provided `Rng` values,
//! so seeded runs are fully reproducible. The schedule is one
//! authoritative match list; the by-round and by-court views are always
//! derived from it, never stored alongside it.

pub mod history;
pub mod models;
pub mod planner;
pub mod reshuffle;
pub mod selection;
pub mod validation;
