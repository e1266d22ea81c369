//! Exercise service
//!
//! Provides business logic for exercise tracking including:
//! - Exercise history, newest first, with optional filters
//! - Logging sessions with calorie estimates from presets
//! - Deleting sessions

use crate::error::{AppError, AppResult};
use crate::repositories::{FitnessRepository, FitnessStore};
use fitness_tracker_shared::{
    exercises_by_recency, filter_exercises, round_to, Exercise, ExerciseFilter, ExerciseInput,
    ExercisePreset,
};
use tracing::info;
use uuid::Uuid;

/// Exercise service for business logic
pub struct ExerciseService;

impl ExerciseService {
    /// All exercises, most recent first
    pub fn get_all<S: FitnessStore>(repository: &FitnessRepository<S>) -> Vec<&Exercise> {
        exercises_by_recency(&repository.data().exercises)
    }

    /// Exercises matching `filter`, most recent first
    pub fn get_filtered<'a, S: FitnessStore>(
        repository: &'a FitnessRepository<S>,
        filter: &ExerciseFilter,
    ) -> Vec<&'a Exercise> {
        filter_exercises(&repository.data().exercises, filter)
    }

    /// Validate and record a session
    ///
    /// Without explicit calories the burn is estimated from the input's rate,
    /// or else from the first preset of the same type, scaled to the
    /// profile's weight.
    pub async fn log_exercise<S: FitnessStore>(
        repository: &mut FitnessRepository<S>,
        mut input: ExerciseInput,
    ) -> AppResult<Exercise> {
        if input.calories_burned.is_none() {
            if input.calories_per_minute.is_none() {
                let presets = repository.presets().await;
                input.calories_per_minute = presets
                    .preset_for_type(input.exercise_type)
                    .map(|p| p.calories_per_minute);
            }
            input.calories_burned = input.estimated_calories(repository.data().user_profile.weight_kg);
        }

        let exercise = input.validate()?;
        repository.add_exercise(exercise.clone()).await?;

        info!(
            exercise_id = %exercise.id(),
            exercise_type = %exercise.exercise_type,
            minutes = exercise.duration.num_minutes(),
            calories = exercise.calories_burned,
            "Exercise logged"
        );
        Ok(exercise)
    }

    /// Delete a session by id
    pub async fn delete<S: FitnessStore>(repository: &mut FitnessRepository<S>, id: Uuid) -> AppResult<()> {
        if !repository.remove_exercise(id).await? {
            return Err(AppError::NotFound(format!("Exercise {}", id)));
        }
        info!(exercise_id = %id, "Exercise deleted");
        Ok(())
    }

    /// Exercise presets available for new entries
    pub async fn presets<S: FitnessStore>(repository: &FitnessRepository<S>) -> Vec<ExercisePreset> {
        repository.presets().await.exercise_presets.clone()
    }

    /// Calories the named preset would burn for the current user, to one decimal
    pub async fn estimate_calories<S: FitnessStore>(
        repository: &FitnessRepository<S>,
        preset_name: &str,
        duration_minutes: f64,
    ) -> AppResult<f64> {
        let presets = repository.presets().await;
        let preset = presets
            .exercise_preset(preset_name)
            .ok_or_else(|| AppError::NotFound(format!("Exercise preset '{}'", preset_name)))?;
        let weight = repository.data().user_profile.weight_kg;
        Ok(round_to(preset.calories_burned(duration_minutes, weight), 1))
    }
}
