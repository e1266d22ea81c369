//! Meal service
//!
//! Logging, listing and deleting meals, plus pre-filling the entry form from
//! presets.

use crate::error::{AppError, AppResult};
use crate::repositories::{FitnessRepository, FitnessStore};
use chrono::NaiveDateTime;
use fitness_tracker_shared::{filter_meals, meals_by_recency, Meal, MealFilter, MealInput, MealPreset};
use tracing::info;
use uuid::Uuid;

/// Meal service for business logic
pub struct MealService;

impl MealService {
    /// All meals, most recent first
    pub fn get_all<S: FitnessStore>(repository: &FitnessRepository<S>) -> Vec<&Meal> {
        meals_by_recency(&repository.data().meals)
    }

    /// Meals matching `filter`, most recent first
    pub fn get_filtered<'a, S: FitnessStore>(
        repository: &'a FitnessRepository<S>,
        filter: &MealFilter,
    ) -> Vec<&'a Meal> {
        filter_meals(&repository.data().meals, filter)
    }

    /// Validate the entry form and record the meal; nothing is saved on failure
    pub async fn log_meal<S: FitnessStore>(
        repository: &mut FitnessRepository<S>,
        input: &MealInput,
    ) -> AppResult<Meal> {
        let meal = input.validate()?;
        repository.add_meal(meal.clone()).await?;

        info!(
            meal_id = %meal.id(),
            name = %meal.name,
            calories = meal.total_calories(),
            "Meal logged"
        );
        Ok(meal)
    }

    /// Delete a meal by id
    pub async fn delete<S: FitnessStore>(repository: &mut FitnessRepository<S>, id: Uuid) -> AppResult<()> {
        if !repository.remove_meal(id).await? {
            return Err(AppError::NotFound(format!("Meal {}", id)));
        }
        info!(meal_id = %id, "Meal deleted");
        Ok(())
    }

    /// Meal presets available for new entries
    pub async fn presets<S: FitnessStore>(repository: &FitnessRepository<S>) -> Vec<MealPreset> {
        repository.presets().await.meal_presets.clone()
    }

    /// Entry form pre-filled from the named preset
    pub async fn input_from_preset<S: FitnessStore>(
        repository: &FitnessRepository<S>,
        preset_name: &str,
        date: NaiveDateTime,
    ) -> AppResult<MealInput> {
        let presets = repository.presets().await;
        presets
            .meal_preset(preset_name)
            .map(|preset| MealInput::from_preset(preset, date))
            .ok_or_else(|| AppError::NotFound(format!("Meal preset '{}'", preset_name)))
    }
}
