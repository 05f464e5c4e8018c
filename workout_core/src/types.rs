//! Core domain types for the workout generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise records and the catalog that holds them
//! - The preference vocabulary gathered by the selection wizard
//! - Generated exercises and workouts handed back to the caller

use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Normalize a wizard id ("Weight Loss", "weight-loss") to snake_case
fn normalize_token(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

// ============================================================================
// Preference Vocabulary
// ============================================================================

/// Difficulty rating of a catalog exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported fitness level of the user
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    #[default]
    Intermediate,
    #[serde(alias = "expert")]
    Advanced,
}

impl FitnessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    /// Catalog difficulties a user at this level may be given
    pub fn allowed_difficulties(&self) -> &'static [Difficulty] {
        match self {
            FitnessLevel::Beginner => &[Difficulty::Beginner],
            FitnessLevel::Intermediate => &[Difficulty::Beginner, Difficulty::Intermediate],
            FitnessLevel::Advanced => &[
                Difficulty::Beginner,
                Difficulty::Intermediate,
                Difficulty::Advanced,
            ],
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FitnessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" | "expert" => Ok(FitnessLevel::Advanced),
            other => Err(Error::InvalidPreference(format!(
                "unknown fitness level '{}'",
                other
            ))),
        }
    }
}

/// High-level fitness objective
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Strength,
    Endurance,
    Flexibility,
    General,
}

impl Goal {
    /// Wizard id of the goal, as it appears in descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Strength => "strength",
            Goal::Endurance => "endurance",
            Goal::Flexibility => "flexibility",
            Goal::General => "general",
        }
    }

    /// Title used in generated workout names
    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Fat Burn",
            Goal::MuscleGain => "Muscle Builder",
            Goal::Strength => "Strength",
            Goal::Endurance => "Endurance",
            Goal::Flexibility => "Flexibility",
            Goal::General => "Fitness",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "muscle_gain" => Ok(Goal::MuscleGain),
            "strength" => Ok(Goal::Strength),
            "endurance" => Ok(Goal::Endurance),
            "flexibility" => Ok(Goal::Flexibility),
            "general" | "general_fitness" => Ok(Goal::General),
            other => Err(Error::InvalidPreference(format!("unknown goal '{}'", other))),
        }
    }
}

/// Style of session requested in the wizard
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Strength,
    Hypertrophy,
    Hiit,
    Cardio,
    Functional,
    Mixed,
    Flexibility,
    #[default]
    General,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Hypertrophy => "hypertrophy",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Functional => "functional",
            WorkoutType::Mixed => "mixed",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::General => "general",
        }
    }

    /// Title used in generated workout names
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Flexibility => "Flexibility",
            _ => "Workout",
        }
    }

    /// Interval-style sessions: short rests, goal-driven rep ranges
    pub fn is_interval(&self) -> bool {
        matches!(self, WorkoutType::Hiit | WorkoutType::Cardio)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "strength" => Ok(WorkoutType::Strength),
            "hypertrophy" => Ok(WorkoutType::Hypertrophy),
            "hiit" => Ok(WorkoutType::Hiit),
            "cardio" => Ok(WorkoutType::Cardio),
            "functional" => Ok(WorkoutType::Functional),
            "mixed" => Ok(WorkoutType::Mixed),
            "flexibility" => Ok(WorkoutType::Flexibility),
            "general" => Ok(WorkoutType::General),
            other => Err(Error::InvalidPreference(format!(
                "unknown workout type '{}'",
                other
            ))),
        }
    }
}

/// Training intensity attached to a goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Intensity {
    /// Calorie multiplier in whole percent (0.7 => 70)
    pub fn multiplier_percent(&self) -> u32 {
        match self {
            Intensity::Low => 70,
            Intensity::Moderate => 100,
            Intensity::High => 130,
            Intensity::VeryHigh => 160,
        }
    }
}

// ============================================================================
// Catalog Types
// ============================================================================

/// A single exercise definition (e.g., "Bench Press")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExerciseRecord {
    pub id: String,
    pub name: String,
    /// Display muscle group ("Chest", "Legs"), matched by the availability filter
    pub muscle_group: String,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub equipment: Vec<String>,
    pub difficulty: Difficulty,
    pub instructions: Vec<String>,
    pub form_tips: Vec<String>,
    pub common_mistakes: Vec<String>,
}

impl ExerciseRecord {
    pub fn uses_any_equipment(&self, equipment: &[String]) -> bool {
        self.equipment.iter().any(|eq| equipment.contains(eq))
    }

    pub fn has_primary(&self, muscle: &str) -> bool {
        self.primary_muscles.iter().any(|m| m == muscle)
    }

    pub fn has_secondary(&self, muscle: &str) -> bool {
        self.secondary_muscles.iter().any(|m| m == muscle)
    }
}

/// The ordered exercise catalog
///
/// Order matters: it breaks scoring ties and defines the fallback prefix.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: Vec<ExerciseRecord>,
}

// ============================================================================
// Preferences and Generated Output
// ============================================================================

/// Answers gathered by the workout wizard
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPreferences {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub workout_type: WorkoutType,
}

pub(crate) fn default_duration_minutes() -> u32 {
    30
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self {
            goals: Vec::new(),
            fitness_level: FitnessLevel::default(),
            equipment: Vec::new(),
            duration_minutes: default_duration_minutes(),
            target_muscles: Vec::new(),
            workout_type: WorkoutType::default(),
        }
    }
}

impl WorkoutPreferences {
    /// First listed goal, or `General` when none was picked
    pub fn primary_goal(&self) -> Goal {
        self.goals.first().copied().unwrap_or(Goal::General)
    }
}

/// A catalog exercise with its prescription for one workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneratedExercise {
    #[serde(flatten)]
    pub exercise: ExerciseRecord,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub weight: Option<u32>,
}

/// Time split of a workout, in minutes
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutStructure {
    pub warmup_minutes: f64,
    pub main_minutes: f64,
    pub cooldown_minutes: f64,
    pub exercise_count: usize,
}

/// A fully assembled workout
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub difficulty: FitnessLevel,
    pub duration_minutes: u32,
    pub workout_type: WorkoutType,
    pub goals: Vec<Goal>,
    pub equipment: Vec<String>,
    /// Target muscles as the user entered them, before mapping
    pub muscles: Vec<String>,
    pub structure: WorkoutStructure,
    pub exercises: Vec<GeneratedExercise>,
    pub warmup: Vec<GeneratedExercise>,
    pub cooldown: Vec<GeneratedExercise>,
    pub calories: u32,
    pub confidence: f64,
    /// True when no exercise survived filtering and the catalog prefix was used
    pub fallback: bool,
}
