//! Configuration file support for the workout generator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/workout-gen/config.toml`.

use crate::{Error, FitnessLevel, Goal, Result, WorkoutPreferences, WorkoutType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "workout-gen";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Preferences used when the command line leaves a choice open
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_goals")]
    pub goals: Vec<Goal>,

    #[serde(default)]
    pub fitness_level: FitnessLevel,

    #[serde(default = "default_equipment")]
    pub equipment: Vec<String>,

    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,

    #[serde(default)]
    pub target_muscles: Vec<String>,

    #[serde(default)]
    pub workout_type: WorkoutType,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            goals: default_goals(),
            fitness_level: FitnessLevel::default(),
            equipment: default_equipment(),
            duration_minutes: default_duration_minutes(),
            target_muscles: Vec::new(),
            workout_type: WorkoutType::default(),
        }
    }
}

impl DefaultsConfig {
    /// Default preferences as a complete request
    pub fn to_preferences(&self) -> WorkoutPreferences {
        WorkoutPreferences {
            goals: self.goals.clone(),
            fitness_level: self.fitness_level,
            equipment: self.equipment.clone(),
            duration_minutes: self.duration_minutes,
            target_muscles: self.target_muscles.clone(),
            workout_type: self.workout_type,
        }
    }
}

/// Generator behaviour
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Fixed RNG seed; unset means a fresh workout every run
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_goals() -> Vec<Goal> {
    vec![Goal::General]
}

fn default_equipment() -> Vec<String> {
    vec!["bodyweight".into()]
}

fn default_duration_minutes() -> u32 {
    30
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Reject values the generator would silently rewrite
    pub fn validate(&self) -> Result<()> {
        if self.defaults.duration_minutes == 0 {
            return Err(Error::Config(
                "defaults.duration_minutes must be greater than zero".into(),
            ));
        }
        if self.defaults.duration_minutes > crate::engine::MAX_DURATION_MINUTES {
            return Err(Error::Config(format!(
                "defaults.duration_minutes must be at most {}",
                crate::engine::MAX_DURATION_MINUTES
            )));
        }
        Ok(())
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
