//! Append-only log of generated workouts.
//!
//! Workouts are appended to a JSONL (JSON Lines) file with file locking
//! to ensure safe concurrent access.

use crate::{GeneratedWorkout, Result};
use chrono::{DateTime, Duration, Utc};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Destination for workouts the user chose to keep
pub trait WorkoutSink {
    fn append(&mut self, workout: &GeneratedWorkout) -> Result<()>;
}

/// JSONL-based workout sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl WorkoutSink for JsonlSink {
    fn append(&mut self, workout: &GeneratedWorkout) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        // One line per workout; the lock keeps concurrent writers from interleaving
        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(workout)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended workout {} to log", workout.id);
        Ok(())
    }
}

/// Read all workouts from a log file
///
/// Lines that fail to parse are skipped with a warning.
pub fn read_workouts(path: &Path) -> Result<Vec<GeneratedWorkout>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut workouts = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<GeneratedWorkout>(&line) {
            Ok(workout) => workouts.push(workout),
            Err(e) => {
                tracing::warn!("Failed to parse workout at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} workouts from log", workouts.len());
    Ok(workouts)
}

/// Workouts generated within the last `days` days, newest first
///
/// A window reaching past the representable date range has no cutoff.
pub fn load_recent_workouts(
    path: &Path,
    now: DateTime<Utc>,
    days: i64,
) -> Result<Vec<GeneratedWorkout>> {
    let cutoff = Duration::try_days(days).and_then(|window| now.checked_sub_signed(window));

    let mut workouts: Vec<_> = read_workouts(path)?
        .into_iter()
        .filter(|w| cutoff.map_or(true, |c| w.generated_at >= c))
        .collect();

    workouts.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));

    tracing::info!(
        "Loaded {} workouts from the last {} days",
        workouts.len(),
        days
    );

    Ok(workouts)
}
