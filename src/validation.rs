//! Input validation for scheduling runs.
//!
//! Checks structural integrity of the roster and configuration before
//! planning starts. Detects:
//! - Non-positive court or round counts
//! - Duplicate player names
//! - Grades outside the configured range
//! - Round caps of zero or exceeding the round count
//! - Rosters too large for the doubles subset search
//!
//! A pool that is merely too small for the match format is *not* an
//! error here: undersized courts are reported as shortfalls at planning
//! time instead.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::models::Player;

/// Upper bound on roster size.
///
/// The doubles selector enumerates 4-player subsets, so candidate pools
/// must stay small enough for the O(n⁴) pass to be cheap.
pub const MAX_ROSTER: usize = 64;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Court count is zero.
    InvalidCourtCount,
    /// Round count is zero.
    InvalidRoundCount,
    /// Two players share the same name.
    DuplicateName,
    /// A grade falls outside the configured range.
    GradeOutOfRange,
    /// A round cap is zero or exceeds the round count.
    RoundCapOutOfRange,
    /// The roster exceeds [`MAX_ROSTER`].
    RosterTooLarge,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the roster and configuration for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    players: &[Player],
    courts: u32,
    rounds: u32,
    grade_range: &RangeInclusive<i32>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if courts == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCourtCount,
            "Court count must be at least 1",
        ));
    }

    if rounds == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRoundCount,
            "Round count must be at least 1",
        ));
    }

    if players.len() > MAX_ROSTER {
        errors.push(ValidationError::new(
            ValidationErrorKind::RosterTooLarge,
            format!(
                "Roster has {} players, maximum is {MAX_ROSTER}",
                players.len()
            ),
        ));
    }

    let mut names = HashSet::new();
    for p in players {
        if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate player name: {}", p.name),
            ));
        }

        if !grade_range.contains(&p.grade) {
            errors.push(ValidationError::new(
                ValidationErrorKind::GradeOutOfRange,
                format!(
                    "Player '{}' has grade {} outside {}..={}",
                    p.name,
                    p.grade,
                    grade_range.start(),
                    grade_range.end()
                ),
            ));
        }

        if let Some(cap) = p.round_cap {
            if cap == 0 || cap > rounds {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoundCapOutOfRange,
                    format!(
                        "Player '{}' has round cap {cap}, must be within 1..={rounds}",
                        p.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_players() -> Vec<Player> {
        vec![
            Player::new("Ann", 1),
            Player::new("Ben", 2),
            Player::new("Cal", 4).with_round_cap(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        let players = sample_players();
        assert!(validate_input(&players, 2, 3, &(1..=4)).is_ok());
    }

    #[test]
    fn test_zero_courts_and_rounds() {
        let players = sample_players();
        let errors = validate_input(&players, 0, 0, &(1..=4)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCourtCount));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidRoundCount));
    }

    #[test]
    fn test_duplicate_name() {
        let players = vec![Player::new("Ann", 1), Player::new("Ann", 2)];
        let errors = validate_input(&players, 1, 1, &(1..=4)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_grade_out_of_range() {
        let players = vec![Player::new("Ann", 0), Player::new("Ben", 5)];
        let errors = validate_input(&players, 1, 1, &(1..=4)).unwrap_err();
        let grade_errors = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::GradeOutOfRange)
            .count();
        assert_eq!(grade_errors, 2);
    }

    #[test]
    fn test_round_cap_bounds() {
        let players = vec![
            Player::new("Ann", 1).with_round_cap(0),
            Player::new("Ben", 2).with_round_cap(4),
        ];
        let errors = validate_input(&players, 1, 3, &(1..=4)).unwrap_err();
        let cap_errors = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::RoundCapOutOfRange)
            .count();
        assert_eq!(cap_errors, 2);

        // Cap equal to the round count is fine
        let ok = vec![Player::new("Cal", 3).with_round_cap(3)];
        assert!(validate_input(&ok, 1, 3, &(1..=4)).is_ok());
    }

    #[test]
    fn test_roster_too_large() {
        let players: Vec<Player> = (0..MAX_ROSTER + 1)
            .map(|i| Player::new(format!("P{i}"), 1))
            .collect();
        let errors = validate_input(&players, 1, 1, &(1..=4)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RosterTooLarge));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let players = vec![Player::new("Ann", 9), Player::new("Ann", 1)];
        let errors = validate_input(&players, 0, 2, &(1..=4)).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
