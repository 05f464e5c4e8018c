//! Availability filter over the exercise catalog.
//!
//! Three predicates are applied in order: equipment overlap, target muscle
//! match and difficulty ceiling. Empty equipment or muscle lists disable the
//! corresponding predicate. Preferences are expected to be mapped already
//! (see [`crate::muscles`]).

use crate::{Catalog, ExerciseRecord, WorkoutPreferences};

/// Loose muscle match between an exercise's muscle group and a target
///
/// Case-insensitive equality, or containment in either direction, so that
/// "legs" matches "Legs" and "upper_chest" matches "Chest".
pub fn muscle_matches(muscle_group: &str, target: &str) -> bool {
    let group = muscle_group.to_lowercase();
    let target = target.to_lowercase();
    group == target || group.contains(&target) || target.contains(&group)
}

/// Catalog exercises a user with these preferences can perform
///
/// Returns exercises in catalog order. May be empty; the caller decides how
/// to degrade.
pub fn filter_available<'a>(
    catalog: &'a Catalog,
    prefs: &WorkoutPreferences,
) -> Vec<&'a ExerciseRecord> {
    let mut available: Vec<&ExerciseRecord> = catalog.exercises.iter().collect();
    tracing::debug!("Filtering {} catalog exercises", available.len());

    if !prefs.equipment.is_empty() {
        let before = available.len();
        available.retain(|e| e.uses_any_equipment(&prefs.equipment));
        tracing::debug!(
            "After equipment filter {:?}: {} -> {}",
            prefs.equipment,
            before,
            available.len()
        );
    }

    if !prefs.target_muscles.is_empty() {
        let before = available.len();
        available.retain(|e| {
            prefs
                .target_muscles
                .iter()
                .any(|target| muscle_matches(&e.muscle_group, target))
        });
        tracing::debug!(
            "After muscle filter {:?}: {} -> {}",
            prefs.target_muscles,
            before,
            available.len()
        );
    }

    let allowed = prefs.fitness_level.allowed_difficulties();
    let before = available.len();
    available.retain(|e| allowed.contains(&e.difficulty));
    tracing::debug!(
        "After difficulty filter {:?}: {} -> {}",
        allowed,
        before,
        available.len()
    );

    available
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, Difficulty, FitnessLevel};

    fn prefs(equipment: &[&str], muscles: &[&str], level: FitnessLevel) -> WorkoutPreferences {
        WorkoutPreferences {
            equipment: equipment.iter().map(|s| s.to_string()).collect(),
            target_muscles: muscles.iter().map(|s| s.to_string()).collect(),
            fitness_level: level,
            ..WorkoutPreferences::default()
        }
    }

    #[test]
    fn test_muscle_match_rules() {
        assert!(muscle_matches("Chest", "chest"));
        assert!(muscle_matches("Chest", "upper_chest"));
        assert!(muscle_matches("Shoulders", "shoulder"));
        assert!(!muscle_matches("Back", "biceps"));
    }

    #[test]
    fn test_bodyweight_only() {
        let catalog = build_default_catalog();
        let available = filter_available(
            &catalog,
            &prefs(&["bodyweight"], &[], FitnessLevel::Advanced),
        );
        assert!(!available.is_empty());
        assert!(available
            .iter()
            .all(|e| e.equipment.contains(&"bodyweight".to_string())));
    }

    #[test]
    fn test_beginner_gets_only_beginner_exercises() {
        let catalog = build_default_catalog();
        let available = filter_available(&catalog, &prefs(&[], &[], FitnessLevel::Beginner));
        assert!(!available.is_empty());
        assert!(available.iter().all(|e| e.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn test_chest_with_barbell() {
        let catalog = build_default_catalog();
        let available = filter_available(
            &catalog,
            &prefs(&["barbell"], &["chest"], FitnessLevel::Intermediate),
        );
        let ids: Vec<_> = available.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["bench_press", "decline_bench_press"]);
    }

    #[test]
    fn test_no_filters_keeps_level_appropriate_catalog() {
        let catalog = build_default_catalog();
        let available = filter_available(&catalog, &prefs(&[], &[], FitnessLevel::Advanced));
        assert_eq!(available.len(), catalog.len());
    }

    #[test]
    fn test_impossible_combination_is_empty() {
        let catalog = build_default_catalog();
        let available = filter_available(
            &catalog,
            &prefs(&["leg_press_machine"], &["biceps"], FitnessLevel::Advanced),
        );
        assert!(available.is_empty());
    }
}
