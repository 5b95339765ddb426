//! Round planning and schedule statistics.
//!
//! `RoundPlanner` runs the per-round pipeline — eligibility, priority
//! ordering, pairing/group selection — once per round per court and
//! assembles the schedule. `MatchupKpi` derives the aggregate statistics
//! (match counts, opponent grade exposure) from a finished schedule by
//! replay, so they stay correct after any reshuffle.

mod kpi;
mod round;

pub use kpi::MatchupKpi;
pub use round::RoundPlanner;
