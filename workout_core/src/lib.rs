#![forbid(unsafe_code)]

//! Core domain model and generation pipeline for the workout generator.
//!
//! This crate provides:
//! - Domain types (exercises, preferences, generated workouts)
//! - The built-in exercise catalog
//! - The generation pipeline (mapping, filtering, scoring, prescription, assembly)
//! - Persistence (workout log, CSV export, saved profile)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod goals;
pub mod muscles;
pub mod filter;
pub mod scoring;
pub mod prescription;
pub mod engine;
pub mod workout_log;
pub mod export;
pub mod profile;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use engine::{generate_workout, generate_workout_with};
pub use workout_log::{JsonlSink, WorkoutSink};
pub use profile::UserProfile;
