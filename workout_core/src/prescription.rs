//! Set, rep and rest assignment for selected exercises.
//!
//! Ranges depend on the workout type, the primary goal and the fitness
//! level; values are sampled uniformly from the injected random source so a
//! seeded generator gives repeatable workouts.

use crate::goals::{goal_profile, set_range};
use crate::{ExerciseRecord, FitnessLevel, GeneratedExercise, WorkoutPreferences, WorkoutType};
use rand::Rng;
use std::ops::RangeInclusive;

const STRENGTH_REPS: RangeInclusive<u32> = 4..=8;
const STRENGTH_REST_SECONDS: RangeInclusive<u32> = 120..=180;
const INTERVAL_REST_SECONDS: RangeInclusive<u32> = 30..=60;
const ADVANCED_WEIGHT: RangeInclusive<u32> = 20..=50;

/// Prescribe sets, reps, rest and weight for one exercise
pub fn prescribe<R: Rng + ?Sized>(
    exercise: &ExerciseRecord,
    prefs: &WorkoutPreferences,
    rng: &mut R,
) -> GeneratedExercise {
    let goal = goal_profile(prefs.primary_goal());

    let (reps, rest) = match prefs.workout_type {
        WorkoutType::Strength => (STRENGTH_REPS, STRENGTH_REST_SECONDS),
        t if t.is_interval() => (goal.rep_range, INTERVAL_REST_SECONDS),
        _ => (goal.rep_range, goal.rest_seconds),
    };

    // Interval types share the level range rather than a fixed 3..=5
    let sets = rng.gen_range(set_range(prefs.fitness_level));
    let reps = rng.gen_range(reps);
    let rest_seconds = rng.gen_range(rest);
    let weight = match prefs.fitness_level {
        FitnessLevel::Advanced => Some(rng.gen_range(ADVANCED_WEIGHT)),
        _ => None,
    };

    GeneratedExercise {
        exercise: exercise.clone(),
        sets,
        reps,
        rest_seconds,
        weight,
    }
}
