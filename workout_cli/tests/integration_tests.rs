//! Integration tests for the workout-gen binary.
//!
//! These tests verify end-to-end behavior including:
//! - Generating, displaying and saving workouts
//! - Reproducible output under a fixed seed
//! - History and CSV export over the workout log

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with config isolated under the test directory
fn cli(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workout-gen"));
    cmd.env("XDG_CONFIG_HOME", root.join("config"));
    cmd
}

fn generate_json(root: &Path, args: &[&str]) -> serde_json::Value {
    let output = cli(root)
        .arg("generate")
        .arg("--data-dir")
        .arg(root)
        .arg("--json")
        .args(args)
        .output()
        .expect("Failed to run workout-gen");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("Output was not valid JSON")
}

fn exercise_ids(workout: &serde_json::Value) -> Vec<String> {
    workout["exercises"]
        .as_array()
        .expect("exercises should be an array")
        .iter()
        .map(|e| e["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personalized workout generator"));
}

#[test]
fn test_default_command_saves_workout() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout saved"));

    assert!(data_dir.join("workouts.jsonl").exists());
    assert!(data_dir.join("profile.json").exists());
}

#[test]
fn test_dry_run_does_not_save() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Warmup"))
        .stdout(predicate::str::contains("Cooldown"));

    assert!(!data_dir.join("workouts.jsonl").exists());
    assert!(!data_dir.join("profile.json").exists());
}

#[test]
fn test_json_output_shape() {
    let temp_dir = setup_test_dir();
    let workout = generate_json(
        temp_dir.path(),
        &[
            "--dry-run",
            "--goal",
            "muscle_gain",
            "--equipment",
            "barbell,dumbbells,bench",
            "--muscle",
            "chest",
            "--duration",
            "45",
            "--seed",
            "7",
        ],
    );

    assert_eq!(workout["warmup"].as_array().map(Vec::len), Some(2));
    assert_eq!(workout["cooldown"].as_array().map(Vec::len), Some(2));
    assert_eq!(workout["duration_minutes"], 45);
    assert_eq!(workout["fallback"], false);
    assert_eq!(workout["equipment"][0], "barbell");

    let confidence = workout["confidence"].as_f64().unwrap();
    assert!((0.0..=0.99).contains(&confidence));

    let ids = exercise_ids(&workout);
    assert!(!ids.is_empty());
    assert!(ids.contains(&"bench_press".to_string()));
}

#[test]
fn test_same_seed_same_workout() {
    let temp_dir = setup_test_dir();
    let args = ["--dry-run", "--seed", "42", "--level", "advanced", "--equipment", "gym"];

    let first = generate_json(temp_dir.path(), &args);
    let second = generate_json(temp_dir.path(), &args);

    assert_eq!(first["id"], second["id"]);
    assert_eq!(exercise_ids(&first), exercise_ids(&second));
    assert_eq!(first["exercises"], second["exercises"]);
}

#[test]
fn test_nothing_matches_uses_fallback() {
    let temp_dir = setup_test_dir();
    let workout = generate_json(
        temp_dir.path(),
        &[
            "--dry-run",
            "--equipment",
            "leg_press_machine",
            "--muscle",
            "biceps",
            "--duration",
            "60",
        ],
    );

    assert_eq!(workout["fallback"], true);
    assert_eq!(
        exercise_ids(&workout),
        vec![
            "push_up",
            "bench_press",
            "incline_dumbbell_press",
            "dumbbell_flyes"
        ]
    );
}

#[test]
fn test_repeat_uses_saved_preferences() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--goal", "strength", "--level", "beginner", "--muscle", "legs"])
        .assert()
        .success();

    let workout = generate_json(data_dir, &["--repeat", "--dry-run"]);
    assert_eq!(workout["difficulty"], "beginner");
    assert_eq!(workout["goals"][0], "strength");
    assert_eq!(workout["muscles"][0], "legs");
}

#[test]
fn test_repeat_without_profile_falls_back_to_defaults() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--repeat")
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("No saved preferences yet"));
}

#[test]
fn test_sequential_saves_append_lines() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    for seed in 0..3 {
        cli(data_dir)
            .arg("generate")
            .arg("--data-dir")
            .arg(data_dir)
            .arg("--seed")
            .arg(seed.to_string())
            .assert()
            .success();
    }

    let log = fs::read_to_string(data_dir.join("workouts.jsonl")).unwrap();
    assert_eq!(log.lines().count(), 3);

    let profile: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data_dir.join("profile.json")).unwrap())
            .unwrap();
    assert_eq!(profile["workouts_generated"], 3);
}

#[test]
fn test_history_lists_saved_workouts() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--type", "strength"])
        .assert()
        .success();

    cli(data_dir)
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength - Intermediate"));
}

#[test]
fn test_history_empty() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts in the last 7 days"));
}

#[test]
fn test_history_with_huge_window() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();

    cli(data_dir)
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--days")
        .arg("1000000000000")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitness Workout"));
}

#[test]
fn test_export_creates_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    for _ in 0..2 {
        cli(data_dir)
            .arg("generate")
            .arg("--data-dir")
            .arg(data_dir)
            .assert()
            .success();
    }

    cli(data_dir)
        .arg("export")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 workouts"));

    let csv = fs::read_to_string(data_dir.join("workouts.csv")).unwrap();
    assert!(csv.starts_with("id,generated_at,name"));
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_export_to_custom_path() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let output = data_dir.join("reports").join("out.csv");

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();

    cli(data_dir)
        .arg("export")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_export_empty_log() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli(data_dir)
        .arg("export")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));

    assert!(!data_dir.join("workouts.csv").exists());
}

#[test]
fn test_invalid_goal_rejected() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("generate")
        .arg("--goal")
        .arg("flying")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_catalog_filters() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("catalog")
        .args(["--muscle", "chest", "--equipment", "barbell", "--level", "intermediate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bench_press"))
        .stdout(predicate::str::contains("decline_bench_press"))
        .stdout(predicate::str::contains("2 exercises"));
}

#[test]
fn test_catalog_no_match() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("catalog")
        .args(["--equipment", "kettlebell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises match"));
}
