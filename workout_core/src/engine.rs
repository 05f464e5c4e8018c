//! Workout generation engine.
//!
//! Assembles a complete workout from preferences:
//! - Map coarse wizard tokens to catalog tags
//! - Size the session from duration and workout type
//! - Filter, rank and select unique exercises, then prescribe each
//! - Attach the fixed warmup and cooldown
//! - Derive name, description, calorie estimate and confidence

use crate::catalog::{cooldown, get_default_catalog, warmup};
use crate::filter::filter_available;
use crate::goals::goal_profile;
use crate::muscles::{map_equipment, map_muscle_groups};
use crate::prescription::prescribe;
use crate::scoring::prioritize;
use crate::{
    Catalog, GeneratedExercise, GeneratedWorkout, WorkoutPreferences, WorkoutStructure,
    WorkoutType,
};
use chrono::Utc;
use rand::Rng;
use std::collections::HashSet;
use uuid::{Builder, Uuid};

/// Calories burned per minute before the intensity multiplier
pub const BASE_CALORIES_PER_MINUTE: u32 = 8;

/// Longest session the generator will plan
pub const MAX_DURATION_MINUTES: u32 = 240;

/// Exercises taken from the head of the catalog when nothing passes the filter
const FALLBACK_LIMIT: usize = 4;

const CONFIDENCE_CEILING: f64 = 0.99;

/// Generate a workout from the default catalog using the thread-local RNG
pub fn generate_workout(prefs: &WorkoutPreferences) -> GeneratedWorkout {
    generate_workout_with(get_default_catalog(), prefs, &mut rand::thread_rng())
}

/// Generate a workout from an explicit catalog and random source
///
/// Never fails: an empty filter result degrades to a catalog prefix and
/// out-of-range durations are normalized.
pub fn generate_workout_with<R: Rng + ?Sized>(
    catalog: &Catalog,
    prefs: &WorkoutPreferences,
    rng: &mut R,
) -> GeneratedWorkout {
    let mapped = WorkoutPreferences {
        target_muscles: map_muscle_groups(&prefs.target_muscles),
        equipment: map_equipment(&prefs.equipment),
        duration_minutes: normalize_duration(prefs.duration_minutes),
        ..prefs.clone()
    };

    tracing::debug!(
        "Generating {} workout for {:?} (muscles {:?})",
        mapped.workout_type,
        mapped.goals,
        mapped.target_muscles
    );

    let structure = determine_structure(mapped.duration_minutes, mapped.workout_type);
    let (exercises, fallback) = select_exercises(catalog, &mapped, &structure, rng);

    let calories = calculate_calories(&mapped);
    let name = workout_name(&mapped);
    let description = workout_description(&mapped, &prefs.equipment, exercises.len());
    let confidence = calculate_confidence(&mapped, &exercises);

    tracing::info!(
        "Generated '{}' with {} exercises (confidence {:.2})",
        name,
        exercises.len(),
        confidence
    );

    GeneratedWorkout {
        id: random_id(rng),
        generated_at: Utc::now(),
        name,
        description,
        difficulty: mapped.fitness_level,
        duration_minutes: mapped.duration_minutes,
        workout_type: mapped.workout_type,
        goals: mapped.goals.clone(),
        equipment: prefs.equipment.clone(),
        muscles: prefs.target_muscles.clone(),
        structure,
        exercises,
        warmup: warmup().to_vec(),
        cooldown: cooldown().to_vec(),
        calories,
        confidence,
        fallback,
    }
}

/// Replace a missing duration with the default and clamp long ones
pub fn normalize_duration(minutes: u32) -> u32 {
    match minutes {
        0 => crate::types::default_duration_minutes(),
        m => m.min(MAX_DURATION_MINUTES),
    }
}

/// Split the session into phases and size the main block
pub fn determine_structure(duration_minutes: u32, workout_type: WorkoutType) -> WorkoutStructure {
    let d = f64::from(duration_minutes);

    let (warmup, main, cooldown, count) = match workout_type {
        WorkoutType::Hiit | WorkoutType::Cardio => (
            (d * 0.1).min(5.0),
            d * 0.8,
            (d * 0.1).min(10.0),
            (duration_minutes / 5).min(8),
        ),
        WorkoutType::Strength => (
            (d * 0.15).min(10.0),
            d * 0.7,
            (d * 0.15).min(10.0),
            (duration_minutes / 8).min(6),
        ),
        _ => (
            (d * 0.1).min(5.0),
            d * 0.8,
            (d * 0.1).min(5.0),
            (duration_minutes / 6).min(8),
        ),
    };

    WorkoutStructure {
        warmup_minutes: warmup,
        main_minutes: main,
        cooldown_minutes: cooldown,
        exercise_count: count.max(1) as usize,
    }
}

/// Pick and prescribe the main-block exercises
///
/// Returns the exercises and whether the fallback prefix was used.
fn select_exercises<R: Rng + ?Sized>(
    catalog: &Catalog,
    prefs: &WorkoutPreferences,
    structure: &WorkoutStructure,
    rng: &mut R,
) -> (Vec<GeneratedExercise>, bool) {
    let available = filter_available(catalog, prefs);

    if available.is_empty() {
        let take = FALLBACK_LIMIT.min(structure.exercise_count);
        tracing::warn!(
            "No exercises match the preferences, falling back to the first {} catalog entries",
            take
        );
        let exercises = catalog
            .exercises
            .iter()
            .take(take)
            .map(|e| prescribe(e, prefs, rng))
            .collect();
        return (exercises, true);
    }

    let ranked = prioritize(available, prefs);
    let mut selected_ids = HashSet::new();
    let mut exercises = Vec::with_capacity(structure.exercise_count);

    for exercise in ranked {
        if exercises.len() >= structure.exercise_count {
            break;
        }
        if !selected_ids.insert(exercise.id.as_str()) {
            continue;
        }
        exercises.push(prescribe(exercise, prefs, rng));
    }

    tracing::debug!(
        "Selected {} of {} requested exercises",
        exercises.len(),
        structure.exercise_count
    );

    (exercises, false)
}

/// Calorie estimate: base rate x duration x goal intensity, floored
///
/// The duration is normalized first, so 0 counts as the default session.
pub fn calculate_calories(prefs: &WorkoutPreferences) -> u32 {
    let percent = goal_profile(prefs.primary_goal())
        .intensity
        .multiplier_percent();
    BASE_CALORIES_PER_MINUTE * normalize_duration(prefs.duration_minutes) * percent / 100
}

fn workout_name(prefs: &WorkoutPreferences) -> String {
    let goal_name = prefs
        .goals
        .first()
        .map(|g| g.display_name())
        .unwrap_or("Fitness");

    format!(
        "{} {} - {} ({}min)",
        goal_name,
        prefs.workout_type.display_name(),
        prefs.fitness_level,
        prefs.duration_minutes
    )
}

fn workout_description(
    prefs: &WorkoutPreferences,
    equipment: &[String],
    exercise_count: usize,
) -> String {
    let goal = prefs.goals.first().map(|g| g.as_str()).unwrap_or("fitness");
    let muscles = if prefs.target_muscles.is_empty() {
        "full body".to_string()
    } else {
        prefs.target_muscles.join(", ")
    };
    let equipment = if equipment.is_empty() {
        "any".to_string()
    } else {
        equipment.join(", ")
    };

    format!(
        "A {}-level {} workout targeting {}. This {}-minute session includes {} carefully \
         selected exercises designed to help you achieve your fitness goals. Perfect for {} \
         equipment.",
        prefs.fitness_level.label().to_lowercase(),
        goal,
        muscles,
        prefs.duration_minutes,
        exercise_count,
        equipment
    )
}

/// Share of exercises satisfying a predicate, 0 for an empty list
fn fraction<F>(exercises: &[GeneratedExercise], predicate: F) -> f64
where
    F: Fn(&GeneratedExercise) -> bool,
{
    if exercises.is_empty() {
        return 0.0;
    }
    let hits = exercises.iter().filter(|e| predicate(e)).count();
    hits as f64 / exercises.len() as f64
}

/// Heuristic match quality in [0, 0.99]
pub fn calculate_confidence(prefs: &WorkoutPreferences, exercises: &[GeneratedExercise]) -> f64 {
    let equipment_match = if prefs.equipment.is_empty() {
        1.0
    } else {
        fraction(exercises, |e| e.exercise.uses_any_equipment(&prefs.equipment))
    };

    let muscle_match = if prefs.target_muscles.is_empty() {
        1.0
    } else {
        fraction(exercises, |e| {
            prefs
                .target_muscles
                .iter()
                .any(|m| e.exercise.has_primary(m) || e.exercise.has_secondary(m))
        })
    };

    let goal_alignment = if prefs.goals.is_empty() {
        0.5
    } else {
        let total: f64 = prefs
            .goals
            .iter()
            .map(|goal| {
                let profile = goal_profile(*goal);
                fraction(exercises, |e| profile.focuses_any(&e.exercise.primary_muscles))
            })
            .sum();
        total / prefs.goals.len() as f64
    };

    let confidence = 0.5 + equipment_match * 0.2 + muscle_match * 0.2 + goal_alignment * 0.1;
    confidence.min(CONFIDENCE_CEILING)
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}
