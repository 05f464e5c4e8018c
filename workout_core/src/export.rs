//! CSV export of logged workouts.
//!
//! One summary row per workout; the full exercise detail stays in the JSONL
//! log.

use crate::{GeneratedWorkout, Result};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    generated_at: String,
    name: String,
    difficulty: String,
    workout_type: String,
    duration_minutes: u32,
    exercise_count: usize,
    calories: u32,
    confidence: String,
    fallback: bool,
    exercises: String,
}

impl From<&GeneratedWorkout> for CsvRow {
    fn from(workout: &GeneratedWorkout) -> Self {
        CsvRow {
            id: workout.id.to_string(),
            generated_at: workout.generated_at.to_rfc3339(),
            name: workout.name.clone(),
            difficulty: workout.difficulty.label().to_string(),
            workout_type: workout.workout_type.as_str().to_string(),
            duration_minutes: workout.duration_minutes,
            exercise_count: workout.exercises.len(),
            calories: workout.calories,
            confidence: format!("{:.2}", workout.confidence),
            fallback: workout.fallback,
            exercises: workout
                .exercises
                .iter()
                .map(|e| e.exercise.id.as_str())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Write workouts to a CSV file, replacing any previous export
///
/// Returns the number of rows written. The file is synced before returning.
pub fn export_csv(workouts: &[GeneratedWorkout], csv_path: &Path) -> Result<usize> {
    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(csv_path)?;

    for workout in workouts {
        writer.serialize(CsvRow::from(workout))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    file.sync_all()?;

    tracing::info!("Exported {} workouts to {:?}", workouts.len(), csv_path);
    Ok(workouts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout_log::tests::workout_generated_days_ago;

    #[test]
    fn test_export_writes_header_and_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("out").join("workouts.csv");

        let workouts = vec![
            workout_generated_days_ago(1, 1),
            workout_generated_days_ago(0, 2),
        ];
        let count = export_csv(&workouts, &csv_path).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert!(content.starts_with("id,generated_at,name,difficulty,workout_type"));

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(reader.into_records().count(), 2);
    }

    #[test]
    fn test_export_replaces_previous_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("workouts.csv");

        export_csv(&[workout_generated_days_ago(0, 1)], &csv_path).unwrap();
        export_csv(&[workout_generated_days_ago(0, 2)], &csv_path).unwrap();

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(reader.into_records().count(), 1);
    }

    #[test]
    fn test_exercise_ids_joined() {
        let workout = workout_generated_days_ago(0, 3);
        let row = CsvRow::from(&workout);
        assert_eq!(row.exercise_count, workout.exercises.len());
        assert_eq!(row.exercises.split(';').count(), workout.exercises.len());
        assert_eq!(row.difficulty, "Intermediate");
    }
}
