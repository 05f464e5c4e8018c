//! Recovery tests: damaged data and config files must not stop generation.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cli(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workout-gen"));
    cmd.env("XDG_CONFIG_HOME", root.join("config"));
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_profile_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    fs::write(data_dir.join("profile.json"), "{ invalid json }}}}")
        .expect("Failed to write corrupted profile");

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--repeat")
        .assert()
        .success();

    // Rewritten with a valid profile after the save
    let content = fs::read_to_string(data_dir.join("profile.json")).unwrap();
    let profile: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(profile["workouts_generated"], 1);
}

#[test]
fn test_corrupted_log_lines_skipped() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    fs::write(
        data_dir.join("workouts.jsonl"),
        "{ invalid json }\n{ more invalid }\n",
    )
    .expect("Failed to write corrupted log");

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
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 workouts"));
}

#[test]
fn test_empty_files() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    fs::write(data_dir.join("workouts.jsonl"), "").unwrap();
    fs::write(data_dir.join("profile.json"), "").unwrap();

    cli(data_dir)
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts"));

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--repeat")
        .arg("--dry-run")
        .assert()
        .success();
}

#[test]
fn test_config_defaults_applied() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let config_dir = data_dir.join("config").join("workout-gen");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[defaults]\nfitness_level = \"beginner\"\nduration_minutes = 20\n\n[generator]\nseed = 9\n",
    )
    .unwrap();

    let output = cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--json")
        .arg("--dry-run")
        .output()
        .unwrap();
    assert!(output.status.success());

    let workout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(workout["difficulty"], "beginner");
    assert_eq!(workout["duration_minutes"], 20);
}

#[test]
fn test_invalid_config_reported() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    let config_dir = data_dir.join("config").join("workout-gen");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[defaults]\nduration_minutes = 0\n",
    )
    .unwrap();

    cli(data_dir)
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--dry-run")
        .assert()
        .failure();
}
