//! Heuristic tables for goals and fitness levels.
//!
//! Each goal carries the muscles it favours, rep/rest ranges and an
//! intensity; each fitness level carries a set range. The ranges are
//! inclusive and sampled by the prescription step.

use crate::{FitnessLevel, Goal, Intensity};
use std::ops::RangeInclusive;

/// Scoring and prescription parameters for a goal
#[derive(Clone, Debug)]
pub struct GoalProfile {
    pub focus_muscles: &'static [&'static str],
    pub rep_range: RangeInclusive<u32>,
    pub rest_seconds: RangeInclusive<u32>,
    pub intensity: Intensity,
}

impl GoalProfile {
    pub fn focuses_any(&self, muscles: &[String]) -> bool {
        self.focus_muscles
            .iter()
            .any(|focus| muscles.iter().any(|m| m == focus))
    }
}

/// Look up the profile for a goal
pub fn goal_profile(goal: Goal) -> GoalProfile {
    match goal {
        Goal::WeightLoss => GoalProfile {
            focus_muscles: &["legs", "core"],
            rep_range: 12..=20,
            rest_seconds: 30..=60,
            intensity: Intensity::High,
        },
        Goal::MuscleGain => GoalProfile {
            focus_muscles: &["chest", "back", "legs"],
            rep_range: 6..=12,
            rest_seconds: 90..=180,
            intensity: Intensity::High,
        },
        Goal::Strength => GoalProfile {
            focus_muscles: &["legs", "back", "chest"],
            rep_range: 1..=6,
            rest_seconds: 180..=300,
            intensity: Intensity::VeryHigh,
        },
        Goal::Endurance => GoalProfile {
            focus_muscles: &["legs", "core"],
            rep_range: 15..=30,
            rest_seconds: 30..=60,
            intensity: Intensity::Moderate,
        },
        Goal::Flexibility => GoalProfile {
            focus_muscles: &["core"],
            rep_range: 1..=1,
            rest_seconds: 30..=60,
            intensity: Intensity::Low,
        },
        Goal::General => GoalProfile {
            focus_muscles: &["chest", "back", "legs", "core"],
            rep_range: 8..=15,
            rest_seconds: 60..=90,
            intensity: Intensity::Moderate,
        },
    }
}

/// Sets per exercise for a fitness level
pub fn set_range(level: FitnessLevel) -> RangeInclusive<u32> {
    match level {
        FitnessLevel::Beginner => 2..=3,
        FitnessLevel::Intermediate => 3..=4,
        FitnessLevel::Advanced => 4..=5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_is_very_high_intensity() {
        assert_eq!(goal_profile(Goal::Strength).intensity, Intensity::VeryHigh);
        assert_eq!(Intensity::VeryHigh.multiplier_percent(), 160);
    }

    #[test]
    fn test_focus_match() {
        let profile = goal_profile(Goal::WeightLoss);
        assert!(profile.focuses_any(&["core".to_string()]));
        assert!(!profile.focuses_any(&["chest".to_string(), "triceps".to_string()]));
    }

    #[test]
    fn test_set_ranges_increase_with_level() {
        assert!(set_range(FitnessLevel::Beginner).end() < set_range(FitnessLevel::Advanced).start());
    }
}
