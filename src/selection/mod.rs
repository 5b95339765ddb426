//! Candidate selection for court assignment.
//!
//! Provides the per-round pipeline the planner runs before filling each
//! court: eligibility filtering and priority ordering (`priority`), the
//! singles pairing selector (`singles`), and the doubles group search
//! (`doubles`).
//!
//! # Score Convention
//! Both selectors minimize grade distance: singles minimizes the
//! candidate's distance to the grades already faced, doubles minimizes
//! the gap between the two team averages.

mod doubles;
mod priority;
mod singles;

pub use doubles::{select_group, GroupPick};
pub use priority::{eligible_players, order_by_priority, PriorityKey};
pub use singles::select_opponent;

/// Absolute distance between two skill grades.
#[inline]
pub fn grade_distance(a: i32, b: i32) -> i32 {
    (a - b).abs()
}
