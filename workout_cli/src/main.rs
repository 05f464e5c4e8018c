use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use workout_core::export::export_csv;
use workout_core::filter::filter_available;
use workout_core::muscles::{map_equipment, map_muscle_groups};
use workout_core::workout_log::{load_recent_workouts, read_workouts};
use workout_core::*;

const LOG_FILE: &str = "workouts.jsonl";
const PROFILE_FILE: &str = "profile.json";
const EXPORT_FILE: &str = "workouts.csv";

#[derive(Parser)]
#[command(name = "workout-gen")]
#[command(about = "Personalized workout generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout from preferences (default)
    Generate(GenerateArgs),

    /// List catalog exercises, optionally filtered
    Catalog {
        /// Muscle group or composite token (chest, push, full_body, ...)
        #[arg(long = "muscle", value_delimiter = ',')]
        muscles: Vec<String>,

        /// Equipment tag or bundle (bodyweight, dumbbells, gym, ...)
        #[arg(long, value_delimiter = ',')]
        equipment: Vec<String>,

        /// Only show exercises suitable for this level
        #[arg(long)]
        level: Option<FitnessLevel>,
    },

    /// Show workouts generated recently
    History {
        /// How many days back to look
        #[arg(long, default_value_t = 7)]
        days: i64,
    },

    /// Export the workout log to CSV
    Export {
        /// Output file (defaults to workouts.csv in the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Goal (weight_loss, muscle_gain, strength, endurance, flexibility, general)
    #[arg(long = "goal", value_delimiter = ',')]
    goals: Vec<Goal>,

    /// Fitness level (beginner, intermediate, advanced)
    #[arg(long)]
    level: Option<FitnessLevel>,

    /// Equipment owned
    #[arg(long, value_delimiter = ',')]
    equipment: Vec<String>,

    /// Session length in minutes
    #[arg(long)]
    duration: Option<u32>,

    /// Target muscle group
    #[arg(long = "muscle", value_delimiter = ',')]
    muscles: Vec<String>,

    /// Workout type (strength, hypertrophy, hiit, cardio, functional, mixed, ...)
    #[arg(long = "type")]
    workout_type: Option<WorkoutType>,

    /// Seed the random source for a reproducible workout
    #[arg(long)]
    seed: Option<u64>,

    /// Print the workout as JSON
    #[arg(long)]
    json: bool,

    /// Show the workout without saving it
    #[arg(long)]
    dry_run: bool,

    /// Start from the preferences of the last saved workout
    #[arg(long)]
    repeat: bool,
}

fn main() -> Result<()> {
    workout_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Generate(args)) => cmd_generate(&data_dir, args, &config),
        Some(Commands::Catalog {
            muscles,
            equipment,
            level,
        }) => cmd_catalog(&muscles, &equipment, level),
        Some(Commands::History { days }) => cmd_history(&data_dir, days),
        Some(Commands::Export { output }) => cmd_export(&data_dir, output),
        None => cmd_generate(&data_dir, GenerateArgs::default(), &config),
    }
}

fn cmd_generate(data_dir: &Path, args: GenerateArgs, config: &Config) -> Result<()> {
    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let profile_path = data_dir.join(PROFILE_FILE);
    let log_path = data_dir.join(LOG_FILE);

    let prefs = resolve_preferences(&args, config, &profile_path)?;

    let mut rng = match args.seed.or(config.generator.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let workout = generate_workout_with(catalog, &prefs, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&workout)?);
    } else {
        display_workout(&workout);
    }

    if args.dry_run {
        if !args.json {
            println!("\n[Dry run - workout not saved]");
        }
        return Ok(());
    }

    let mut sink = JsonlSink::new(&log_path);
    sink.append(&workout)?;
    UserProfile::update(&profile_path, |profile| {
        profile.record(&prefs, &workout);
        Ok(())
    })?;
    tracing::info!("Saved workout {} to {:?}", workout.id, sink.path());

    if !args.json {
        println!("\n✓ Workout saved!");
    }
    Ok(())
}

/// Layer command-line choices over the profile or config defaults
fn resolve_preferences(
    args: &GenerateArgs,
    config: &Config,
    profile_path: &Path,
) -> Result<WorkoutPreferences> {
    let mut prefs = if args.repeat {
        match UserProfile::load(profile_path)?.last_preferences {
            Some(last) => last,
            None => {
                eprintln!("No saved preferences yet. Using defaults.");
                config.defaults.to_preferences()
            }
        }
    } else {
        config.defaults.to_preferences()
    };

    if !args.goals.is_empty() {
        prefs.goals = args.goals.clone();
    }
    if let Some(level) = args.level {
        prefs.fitness_level = level;
    }
    if !args.equipment.is_empty() {
        prefs.equipment = args.equipment.clone();
    }
    if let Some(duration) = args.duration {
        prefs.duration_minutes = duration;
    }
    if !args.muscles.is_empty() {
        prefs.target_muscles = args.muscles.clone();
    }
    if let Some(workout_type) = args.workout_type {
        prefs.workout_type = workout_type;
    }

    tracing::debug!("Resolved preferences: {:?}", prefs);
    Ok(prefs)
}

fn cmd_catalog(muscles: &[String], equipment: &[String], level: Option<FitnessLevel>) -> Result<()> {
    let prefs = WorkoutPreferences {
        target_muscles: map_muscle_groups(muscles),
        equipment: map_equipment(equipment),
        fitness_level: level.unwrap_or(FitnessLevel::Advanced),
        ..WorkoutPreferences::default()
    };

    let exercises = filter_available(get_default_catalog(), &prefs);
    if exercises.is_empty() {
        println!("No exercises match those filters.");
        return Ok(());
    }

    for exercise in &exercises {
        println!(
            "{:<26} {:<28} {:<10} {:<13} {}",
            exercise.id,
            exercise.name,
            exercise.muscle_group,
            exercise.difficulty,
            exercise.equipment.join(", ")
        );
    }
    println!("\n{} exercises", exercises.len());
    Ok(())
}

fn cmd_history(data_dir: &Path, days: i64) -> Result<()> {
    let workouts = load_recent_workouts(&data_dir.join(LOG_FILE), chrono::Utc::now(), days)?;

    if workouts.is_empty() {
        println!("No workouts in the last {} days.", days);
        return Ok(());
    }

    for workout in &workouts {
        println!(
            "{}  {}  ({} exercises, ~{} kcal)",
            workout.generated_at.format("%Y-%m-%d %H:%M"),
            workout.name,
            workout.exercises.len(),
            workout.calories
        );
    }
    Ok(())
}

fn cmd_export(data_dir: &Path, output: Option<PathBuf>) -> Result<()> {
    let workouts = read_workouts(&data_dir.join(LOG_FILE))?;
    if workouts.is_empty() {
        println!("No workouts logged - nothing to export.");
        return Ok(());
    }

    let csv_path = output.unwrap_or_else(|| data_dir.join(EXPORT_FILE));
    let count = export_csv(&workouts, &csv_path)?;

    println!("✓ Exported {} workouts to CSV", count);
    println!("  CSV: {}", csv_path.display());
    Ok(())
}

fn display_workout(workout: &GeneratedWorkout) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", workout.name);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", workout.description);
    println!();
    println!(
        "  Duration: {} min  |  ~{} kcal  |  Match: {:.0}%",
        workout.duration_minutes,
        workout.calories,
        workout.confidence * 100.0
    );

    if workout.fallback {
        println!("  ⚠ Nothing matched every preference; showing general exercises instead.");
    }

    println!("\n  Warmup (~{:.0} min)", workout.structure.warmup_minutes);
    for step in &workout.warmup {
        println!("    • {} - {} reps", step.exercise.name, step.reps);
    }

    println!("\n  Main (~{:.0} min)", workout.structure.main_minutes);
    for (i, exercise) in workout.exercises.iter().enumerate() {
        let weight = exercise
            .weight
            .map(|w| format!(" @ {}", w))
            .unwrap_or_default();
        println!(
            "    {}. {} - {} x {}{}, rest {}s",
            i + 1,
            exercise.exercise.name,
            exercise.sets,
            exercise.reps,
            weight,
            exercise.rest_seconds
        );
    }

    println!("\n  Cooldown (~{:.0} min)", workout.structure.cooldown_minutes);
    for step in &workout.cooldown {
        println!("    • {} - hold {}s", step.exercise.name, step.rest_seconds);
    }
}
