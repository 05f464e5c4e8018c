//! Priority scoring of available exercises.
//!
//! Scores are additive:
//! - +3 per goal whose focus muscles hit the exercise's primary muscles
//! - +1 per goal whose focus muscles hit its secondary muscles
//! - +2 per target muscle among the primary muscles
//! - +1 per target muscle among the secondary muscles
//!
//! Ranking is a stable descending sort, so ties keep catalog order.

use crate::goals::goal_profile;
use crate::{ExerciseRecord, WorkoutPreferences};
use std::cmp::Reverse;

/// Relevance score of one exercise for these preferences
pub fn score_exercise(exercise: &ExerciseRecord, prefs: &WorkoutPreferences) -> u32 {
    let mut score = 0;

    for goal in &prefs.goals {
        let profile = goal_profile(*goal);
        if profile.focuses_any(&exercise.primary_muscles) {
            score += 3;
        }
        if profile.focuses_any(&exercise.secondary_muscles) {
            score += 1;
        }
    }

    for muscle in &prefs.target_muscles {
        if exercise.has_primary(muscle) {
            score += 2;
        }
        if exercise.has_secondary(muscle) {
            score += 1;
        }
    }

    score
}

/// Order exercises by descending score
pub fn prioritize<'a>(
    exercises: Vec<&'a ExerciseRecord>,
    prefs: &WorkoutPreferences,
) -> Vec<&'a ExerciseRecord> {
    let mut scored: Vec<(u32, &ExerciseRecord)> = exercises
        .into_iter()
        .map(|e| (score_exercise(e, prefs), e))
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|(score, _)| Reverse(*score));

    if let Some((top, exercise)) = scored.first() {
        tracing::debug!("Top ranked exercise: {} (score {})", exercise.id, top);
    }

    scored.into_iter().map(|(_, e)| e).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, Goal};

    fn prefs(goals: &[Goal], muscles: &[&str]) -> WorkoutPreferences {
        WorkoutPreferences {
            goals: goals.to_vec(),
            target_muscles: muscles.iter().map(|s| s.to_string()).collect(),
            ..WorkoutPreferences::default()
        }
    }

    #[test]
    fn test_push_up_score() {
        let catalog = build_default_catalog();
        let push_up = catalog.get("push_up").unwrap();

        // muscle_gain focus (chest, back, legs) hits primary "chest": +3
        // secondary ["core", "serratus_anterior"] misses: +0
        // target "chest" primary: +2, target "core" secondary: +1
        let score = score_exercise(push_up, &prefs(&[Goal::MuscleGain], &["chest", "core"]));
        assert_eq!(score, 6);
    }

    #[test]
    fn test_no_preferences_scores_zero() {
        let catalog = build_default_catalog();
        assert!(catalog
            .exercises
            .iter()
            .all(|e| score_exercise(e, &prefs(&[], &[])) == 0));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = build_default_catalog();
        let all: Vec<_> = catalog.exercises.iter().collect();
        let ranked = prioritize(all.clone(), &prefs(&[], &[]));
        let before: Vec<_> = all.iter().map(|e| &e.id).collect();
        let after: Vec<_> = ranked.iter().map(|e| &e.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_higher_scores_first() {
        let catalog = build_default_catalog();
        let all: Vec<_> = catalog.exercises.iter().collect();
        let p = prefs(&[Goal::WeightLoss], &["triceps"]);
        let ranked = prioritize(all, &p);

        let scores: Vec<u32> = ranked.iter().map(|e| score_exercise(e, &p)).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert!(ranked[0].has_primary("triceps"));
    }
}
