//! Fitness Tracker
//!
//! Command line front end for logging exercises and meals.
//!
//! ## Architecture
//!
//! - Shell: screen selection and text rendering
//! - Services: validation and business logic
//! - Repositories: in-memory data persisted as JSON files

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use fitness_tracker_app::{
    config,
    repositories::{FitnessRepository, JsonFileStore},
    AppError,
    services::{ExerciseService, MealService, ProfileService},
    shell::{render, Navigator, Screen, View},
};
use fitness_tracker_shared::{local_now, ExerciseInput, ExerciseType, Gender, MealInput, ValidationError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "fitness-tracker", version, about = "Log exercises and meals and track weekly goals")]
struct Cli {
    /// Directory holding the data files (overrides configuration)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a screen (dashboard, exercises, add-exercise, meals, add-meal, statistics, profile)
    Show { screen: Option<String> },
    /// Log an exercise session
    AddExercise(AddExerciseArgs),
    /// Log a meal
    AddMeal(AddMealArgs),
    /// Delete an exercise by id
    DeleteExercise { id: Uuid },
    /// Delete a meal by id
    DeleteMeal { id: Uuid },
    /// Update profile fields and weekly goals
    SetProfile(SetProfileArgs),
}

#[derive(Args, Debug)]
struct AddExerciseArgs {
    /// Preset to take the type and burn rate from
    #[arg(long)]
    preset: Option<String>,
    /// Exercise type, when no preset is given
    #[arg(long = "type")]
    exercise_type: Option<ExerciseType>,
    /// Duration in minutes
    #[arg(long)]
    minutes: i64,
    /// Calories burned; estimated when omitted
    #[arg(long)]
    calories: Option<f64>,
    /// Local date and time, e.g. 2025-03-05T07:30:00
    #[arg(long)]
    date: Option<NaiveDateTime>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args, Debug)]
struct AddMealArgs {
    /// Preset to pre-fill the entry from
    #[arg(long)]
    preset: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    calories: Option<String>,
    #[arg(long)]
    protein: Option<String>,
    #[arg(long)]
    carbs: Option<String>,
    #[arg(long)]
    fat: Option<String>,
    /// Number of servings
    #[arg(long, default_value_t = 1.0)]
    servings: f64,
    #[arg(long)]
    date: Option<NaiveDateTime>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Args, Debug)]
struct SetProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    age: Option<i32>,
    #[arg(long)]
    gender: Option<Gender>,
    /// Weekly calories burned target
    #[arg(long)]
    burned_target: Option<f64>,
    /// Weekly calories consumed target
    #[arg(long)]
    consumed_target: Option<f64>,
    /// Weekly exercise session target
    #[arg(long)]
    exercise_target: Option<i32>,
}

/// Exit status for rejected input: validation failures, unknown ids or screens
const EXIT_USER_ERROR: u8 = 2;
const EXIT_FAILURE: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AppError>() {
        Some(app_error) if app_error.is_user_error() => EXIT_USER_ERROR,
        _ => EXIT_FAILURE,
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let mut config = config::AppConfig::load()?;
    if let Some(data_dir) = &cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        data_dir = %config.storage.data_dir.display(),
        "Starting Fitness Tracker"
    );

    let store = JsonFileStore::new(&config.storage.data_dir, &config.storage.presets_file);
    let mut repository = FitnessRepository::open(store).await?;
    let navigator = Navigator::new();

    match cli.command.unwrap_or(Command::Show { screen: None }) {
        Command::Show { screen } => {
            if let Some(name) = screen {
                navigator.navigate_by_name(&name)?;
            }
        }
        Command::AddExercise(args) => {
            let input = exercise_input(&repository, args).await?;
            let exercise = ExerciseService::log_exercise(&mut repository, input).await?;
            println!("Logged exercise {}", exercise.id());
            navigator.navigate_to(Screen::Exercises);
        }
        Command::AddMeal(args) => {
            let input = meal_input(&repository, args).await?;
            let meal = MealService::log_meal(&mut repository, &input).await?;
            println!("Logged meal {}", meal.id());
            navigator.navigate_to(Screen::Meals);
        }
        Command::DeleteExercise { id } => {
            ExerciseService::delete(&mut repository, id).await?;
            println!("Deleted exercise {}", id);
            navigator.navigate_to(Screen::Exercises);
        }
        Command::DeleteMeal { id } => {
            MealService::delete(&mut repository, id).await?;
            println!("Deleted meal {}", id);
            navigator.navigate_to(Screen::Meals);
        }
        Command::SetProfile(args) => {
            let profile = apply_profile_args(ProfileService::get_profile(&repository).clone(), args);
            ProfileService::update_profile(&mut repository, profile).await?;
            navigator.navigate_to(Screen::Profile);
        }
    }

    let presets = repository.presets().await;
    let view = View {
        data: repository.data(),
        presets: &presets,
        today: local_now().date(),
    };
    println!("{}", render(navigator.current(), &view));
    Ok(())
}

/// Build the exercise entry from a preset and/or explicit flags
async fn exercise_input(
    repository: &FitnessRepository<JsonFileStore>,
    args: AddExerciseArgs,
) -> Result<ExerciseInput> {
    let date = args.date.unwrap_or_else(local_now);

    let mut input = match &args.preset {
        Some(name) => {
            let presets = repository.presets().await;
            let preset = presets
                .exercise_preset(name)
                .ok_or_else(|| AppError::NotFound(format!("Exercise preset '{}'", name)))?;
            ExerciseInput::from_preset(preset, date, args.minutes)
        }
        None => {
            let exercise_type = args
                .exercise_type
                .ok_or_else(|| {
                    AppError::from(ValidationError::new("type", "Either --preset or --type is required."))
                })?;
            ExerciseInput::new(exercise_type, date, args.minutes)
        }
    };

    if let Some(exercise_type) = args.exercise_type {
        input.exercise_type = exercise_type;
    }
    input.calories_burned = args.calories;
    if let Some(notes) = args.notes {
        input.notes = notes;
    }
    Ok(input)
}

/// Build the meal entry form from a preset and/or explicit flags
async fn meal_input(repository: &FitnessRepository<JsonFileStore>, args: AddMealArgs) -> Result<MealInput> {
    let date = args.date.unwrap_or_else(local_now);

    let mut input = match &args.preset {
        Some(name) => MealService::input_from_preset(repository, name, date).await?,
        None => MealInput {
            date,
            ..MealInput::default()
        },
    };

    let overrides = [
        (&mut input.name, args.name),
        (&mut input.calories, args.calories),
        (&mut input.protein_grams, args.protein),
        (&mut input.carbohydrates_grams, args.carbs),
        (&mut input.fat_grams, args.fat),
        (&mut input.notes, args.notes),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    input.serving_size = args.servings;
    Ok(input)
}

fn apply_profile_args(
    mut profile: fitness_tracker_shared::UserProfile,
    args: SetProfileArgs,
) -> fitness_tracker_shared::UserProfile {
    if let Some(name) = args.name {
        profile.name = name;
    }
    if let Some(weight) = args.weight {
        profile.weight_kg = weight;
    }
    if let Some(height) = args.height {
        profile.height_cm = height;
    }
    if let Some(age) = args.age {
        profile.age = age;
    }
    if let Some(gender) = args.gender {
        profile.gender = gender;
    }
    if let Some(target) = args.burned_target {
        profile.goals.calories_burned_target = target;
    }
    if let Some(target) = args.consumed_target {
        profile.goals.calories_consumed_target = target;
    }
    if let Some(target) = args.exercise_target {
        profile.goals.exercise_count_target = target;
    }
    profile
}

/// Initialize tracing/logging
///
/// Logs go to stderr so rendered screens on stdout stay clean.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitness_tracker_app=info,fitness_tracker=info".into()
        } else {
            "fitness_tracker_app=debug,fitness_tracker=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_exercise() {
        let cli = Cli::try_parse_from([
            "fitness-tracker",
            "--data-dir",
            "/tmp/ft",
            "add-exercise",
            "--type",
            "hiit",
            "--minutes",
            "25",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/ft")));
        match cli.command {
            Some(Command::AddExercise(args)) => {
                assert_eq!(args.exercise_type, Some(ExerciseType::Hiit));
                assert_eq!(args.minutes, 25);
                assert_eq!(args.calories, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_exit_status_separates_user_errors() {
        let rejected: anyhow::Error = AppError::from(ValidationError::new("duration", "too long")).into();
        assert_eq!(exit_status(&rejected), EXIT_USER_ERROR);

        let missing: anyhow::Error = AppError::NotFound("Exercise 42".to_string()).into();
        assert_eq!(exit_status(&missing), EXIT_USER_ERROR);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let failed: anyhow::Error = AppError::io("/data/exercises.json", io).into();
        assert_eq!(exit_status(&failed), EXIT_FAILURE);

        assert_eq!(exit_status(&anyhow::anyhow!("config broke")), EXIT_FAILURE);
    }

    #[test]
    fn test_apply_profile_args_keeps_unset_fields() {
        let args = SetProfileArgs {
            name: None,
            weight: Some(82.5),
            height: None,
            age: None,
            gender: Some(Gender::Female),
            burned_target: None,
            consumed_target: None,
            exercise_target: Some(3),
        };
        let profile = apply_profile_args(fitness_tracker_shared::UserProfile::default(), args);

        assert_eq!(profile.name, "User");
        assert_eq!(profile.weight_kg, 82.5);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.goals.exercise_count_target, 3);
        assert_eq!(profile.height_cm, 170.0);
    }
}
