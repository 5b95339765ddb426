//! Schedule statistics.
//!
//! Derives the per-player aggregate numbers from a completed schedule
//! by replaying its match list against the roster:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Match count | Matchups containing the player |
//! | Opponent grade avg | Mean grade over every co-participant appearance |
//! | Grade gap | \|opponent grade avg − own grade\| |
//!
//! Because everything is recomputed from the authoritative match list,
//! calling [`MatchupKpi::calculate`] after a reshuffle always agrees
//! with the mutated schedule. Values round to 2 decimal places; a player
//! with no matches reports an average of 0.0.

use std::collections::HashMap;

use crate::models::{Player, Schedule};

/// Per-player schedule statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupKpi {
    /// Matchups played per player.
    pub match_counts: HashMap<String, u32>,
    /// Mean grade of co-participants faced, per player.
    pub opponent_grade_avg: HashMap<String, f64>,
    /// Absolute gap between the opponent average and the own grade.
    pub grade_gap: HashMap<String, f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl MatchupKpi {
    /// Computes statistics for every player on the roster.
    ///
    /// Names appearing in the schedule but not on the roster are
    /// ignored; roster players absent from the schedule report zero
    /// matches.
    pub fn calculate(schedule: &Schedule, players: &[Player]) -> Self {
        let grades: HashMap<&str, i32> = players.iter().map(|p| (p.name.as_str(), p.grade)).collect();

        let mut match_counts: HashMap<String, u32> = HashMap::new();
        let mut faced: HashMap<String, Vec<i32>> = HashMap::new();
        for p in players {
            match_counts.insert(p.name.clone(), 0);
            faced.insert(p.name.clone(), Vec::new());
        }

        for m in &schedule.matches {
            for name in &m.players {
                if let Some(count) = match_counts.get_mut(name) {
                    *count += 1;
                    for other in &m.players {
                        if other != name {
                            if let Some(&grade) = grades.get(other.as_str()) {
                                faced.entry(name.clone()).or_default().push(grade);
                            }
                        }
                    }
                }
            }
        }

        let mut opponent_grade_avg = HashMap::new();
        let mut grade_gap = HashMap::new();
        for p in players {
            let grades_seen = faced.get(&p.name).map(Vec::as_slice).unwrap_or(&[]);
            let avg = if grades_seen.is_empty() {
                0.0
            } else {
                round2(grades_seen.iter().sum::<i32>() as f64 / grades_seen.len() as f64)
            };
            opponent_grade_avg.insert(p.name.clone(), avg);
            grade_gap.insert(p.name.clone(), round2((avg - p.grade as f64).abs()));
        }

        Self {
            match_counts,
            opponent_grade_avg,
            grade_gap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Matchup;

    fn sample_players() -> Vec<Player> {
        vec![
            Player::new("Ann", 1),
            Player::new("Ben", 2),
            Player::new("Cal", 3),
            Player::new("Dee", 4),
        ]
    }

    #[test]
    fn test_singles_statistics() {
        let players = sample_players();
        let mut schedule = Schedule::new();
        schedule.add_matchup(Matchup::new(1, 1, vec!["Ann".into(), "Dee".into()]));
        schedule.add_matchup(Matchup::new(2, 1, vec!["Ann".into(), "Ben".into()]));

        let kpi = MatchupKpi::calculate(&schedule, &players);
        assert_eq!(kpi.match_counts["Ann"], 2);
        assert_eq!(kpi.match_counts["Ben"], 1);
        assert_eq!(kpi.match_counts["Cal"], 0);
        // Ann faced grades 4 and 2 → avg 3.0, gap |3.0 - 1| = 2.0
        assert_eq!(kpi.opponent_grade_avg["Ann"], 3.0);
        assert_eq!(kpi.grade_gap["Ann"], 2.0);
    }

    #[test]
    fn test_doubles_counts_all_co_participants() {
        let players = sample_players();
        let mut schedule = Schedule::new();
        schedule.add_matchup(Matchup::new(
            1,
            1,
            vec!["Ann".into(), "Ben".into(), "Cal".into(), "Dee".into()],
        ));

        let kpi = MatchupKpi::calculate(&schedule, &players);
        // Ann faced 2, 3, 4 → avg 3.0
        assert_eq!(kpi.opponent_grade_avg["Ann"], 3.0);
        // Dee faced 1, 2, 3 → avg 2.0, gap |2.0 - 4| = 2.0
        assert_eq!(kpi.opponent_grade_avg["Dee"], 2.0);
        assert_eq!(kpi.grade_gap["Dee"], 2.0);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let players = sample_players();
        let mut schedule = Schedule::new();
        schedule.add_matchup(Matchup::new(1, 1, vec!["Ann".into(), "Ben".into()]));
        schedule.add_matchup(Matchup::new(2, 1, vec!["Ann".into(), "Cal".into()]));
        schedule.add_matchup(Matchup::new(3, 1, vec!["Ann".into(), "Ben".into()]));

        let kpi = MatchupKpi::calculate(&schedule, &players);
        // Ann faced 2, 3, 2 → 7/3 = 2.333... → 2.33
        assert_eq!(kpi.opponent_grade_avg["Ann"], 2.33);
        assert_eq!(kpi.grade_gap["Ann"], 1.33);
    }

    #[test]
    fn test_zero_match_player_reports_zero_average() {
        let players = sample_players();
        let schedule = Schedule::new();

        let kpi = MatchupKpi::calculate(&schedule, &players);
        assert_eq!(kpi.match_counts["Cal"], 0);
        assert_eq!(kpi.opponent_grade_avg["Cal"], 0.0);
        // Gap against an empty average is the own grade
        assert_eq!(kpi.grade_gap["Cal"], 3.0);
    }

    #[test]
    fn test_counts_match_schedule_replay() {
        let players = sample_players();
        let mut schedule = Schedule::new();
        schedule.add_matchup(Matchup::new(1, 1, vec!["Ann".into(), "Ben".into()]));
        schedule.add_matchup(Matchup::new(1, 2, vec!["Cal".into(), "Dee".into()]));
        schedule.add_matchup(Matchup::new(2, 1, vec!["Ben".into(), "Cal".into()]));

        let kpi = MatchupKpi::calculate(&schedule, &players);
        let replay = schedule.match_counts();
        for p in &players {
            assert_eq!(
                kpi.match_counts[&p.name],
                replay.get(&p.name).copied().unwrap_or(0)
            );
        }
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let players = vec![Player::new("Ann", 1)];
        let mut schedule = Schedule::new();
        schedule.add_matchup(Matchup::new(1, 1, vec!["Ann".into(), "Ghost".into()]));

        let kpi = MatchupKpi::calculate(&schedule, &players);
        assert_eq!(kpi.match_counts["Ann"], 1);
        // Ghost has no roster grade, so Ann's average stays empty
        assert_eq!(kpi.opponent_grade_avg["Ann"], 0.0);
        assert!(!kpi.match_counts.contains_key("Ghost"));
    }
}
