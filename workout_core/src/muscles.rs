//! Preference mapping from wizard tokens to catalog tags.
//!
//! The wizard offers coarse choices ("push", "full_body", "home_gym") while
//! the catalog is tagged with granular muscle groups and equipment. Known
//! composite tokens expand; anything else passes through untouched.

use crate::catalog::KNOWN_EQUIPMENT;
use std::collections::HashSet;

/// Muscle groups a composite token stands for
fn muscle_group_expansion(token: &str) -> Option<&'static [&'static str]> {
    let expansion: &'static [&'static str] = match token {
        "chest" => &["chest"],
        "back" => &["back"],
        "legs" => &["legs"],
        "core" => &["core"],
        "shoulders" => &["shoulders"],
        "triceps" => &["triceps"],
        "biceps" => &["biceps"],
        "arms" => &["triceps", "biceps"],
        "full_body" => &[
            "chest",
            "back",
            "legs",
            "core",
            "shoulders",
            "triceps",
            "biceps",
        ],
        "upper_body" => &["chest", "back", "shoulders", "triceps", "biceps"],
        "lower_body" => &["legs", "core"],
        "push" => &["chest", "shoulders", "triceps"],
        "pull" => &["back", "biceps"],
        _ => return None,
    };
    Some(expansion)
}

/// Equipment a wizard bundle stands for
fn equipment_expansion(token: &str) -> Option<&'static [&'static str]> {
    let expansion: &'static [&'static str] = match token {
        "gym" => KNOWN_EQUIPMENT,
        "home_gym" => &["bodyweight", "dumbbells", "barbell", "bench", "pull_up_bar"],
        "minimal" => &["bodyweight", "dumbbells"],
        _ => return None,
    };
    Some(expansion)
}

/// Expand tokens, dropping blanks and keeping first-occurrence order
fn expand<F>(tokens: &[String], lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<&'static [&'static str]>,
{
    let mut seen = HashSet::new();
    let mut mapped = Vec::new();

    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match lookup(token) {
            Some(expansion) => {
                for tag in expansion {
                    if seen.insert(tag.to_string()) {
                        mapped.push(tag.to_string());
                    }
                }
            }
            None => {
                if seen.insert(token.to_string()) {
                    mapped.push(token.to_string());
                }
            }
        }
    }

    mapped
}

/// Expand coarse muscle tokens into granular muscle tags
pub fn map_muscle_groups(tokens: &[String]) -> Vec<String> {
    expand(tokens, muscle_group_expansion)
}

/// Expand equipment bundles into concrete equipment tags
pub fn map_equipment(tokens: &[String]) -> Vec<String> {
    expand(tokens, equipment_expansion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_upper_body_expands() {
        let mapped = map_muscle_groups(&strings(&["upper_body"]));
        assert_eq!(
            mapped,
            strings(&["chest", "back", "shoulders", "triceps", "biceps"])
        );
    }

    #[test]
    fn test_overlapping_groups_deduplicate() {
        let mapped = map_muscle_groups(&strings(&["push", "pull", "chest", "arms"]));
        assert_eq!(
            mapped,
            strings(&["chest", "shoulders", "triceps", "back", "biceps"])
        );
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let mapped = map_muscle_groups(&strings(&["glutes", "core", "glutes"]));
        assert_eq!(mapped, strings(&["glutes", "core"]));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(map_muscle_groups(&[]).is_empty());
        assert!(map_muscle_groups(&strings(&["", "  "])).is_empty());
    }

    #[test]
    fn test_equipment_bundles() {
        let mapped = map_equipment(&strings(&["minimal", "bench"]));
        assert_eq!(mapped, strings(&["bodyweight", "dumbbells", "bench"]));

        let gym = map_equipment(&strings(&["gym"]));
        assert_eq!(gym.len(), KNOWN_EQUIPMENT.len());
    }

    #[test]
    fn test_plain_equipment_unchanged() {
        let mapped = map_equipment(&strings(&["bodyweight"]));
        assert_eq!(mapped, strings(&["bodyweight"]));
    }
}
