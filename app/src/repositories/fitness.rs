//! The fitness repository: owner of the user's data

use super::sample_data::{sample_exercises, sample_meals};
use super::store::FitnessStore;
use crate::error::AppResult;
use chrono::NaiveDateTime;
use fitness_tracker_shared::{local_now, Exercise, FitnessData, Meal, PresetData, UserProfile};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

/// Holds the in-memory copy of everything recorded and writes every change
/// straight back to its store
///
/// Mutations take `&mut self` and await the save before returning, so writes
/// never overlap. Subscribers observe the `last_modified` stamp of each
/// successful save.
pub struct FitnessRepository<S> {
    store: S,
    data: FitnessData,
    changes: watch::Sender<NaiveDateTime>,
}

impl<S: FitnessStore> FitnessRepository<S> {
    /// Load data from `store`, seeding sample entries when nothing was recorded yet
    pub async fn open(store: S) -> AppResult<Self> {
        let data = store.load_data().await;
        let (changes, _) = watch::channel(data.last_modified);
        let mut repository = Self { store, data, changes };

        if repository.data.is_empty() {
            let now = local_now();
            repository.data.exercises = sample_exercises(now);
            repository.data.meals = sample_meals(now);
            info!(
                exercises = repository.data.exercises.len(),
                meals = repository.data.meals.len(),
                "No recorded data, seeded sample entries"
            );
            repository.save().await?;
        }

        Ok(repository)
    }

    pub fn data(&self) -> &FitnessData {
        &self.data
    }

    /// Stamp the data, write it, then notify subscribers
    pub async fn save(&mut self) -> AppResult<()> {
        self.data.last_modified = local_now();
        self.store.save_data(&self.data).await?;
        self.changes.send_replace(self.data.last_modified);
        debug!(last_modified = %self.data.last_modified, "Fitness data saved");
        Ok(())
    }

    pub async fn add_exercise(&mut self, exercise: Exercise) -> AppResult<Uuid> {
        let id = exercise.id();
        self.data.exercises.push(exercise);
        self.save().await?;
        Ok(id)
    }

    /// Remove an exercise; `false` when no exercise has that id
    pub async fn remove_exercise(&mut self, id: Uuid) -> AppResult<bool> {
        let Some(index) = self.data.exercises.iter().position(|e| e.id() == id) else {
            return Ok(false);
        };
        self.data.exercises.remove(index);
        self.save().await?;
        Ok(true)
    }

    pub async fn add_meal(&mut self, meal: Meal) -> AppResult<Uuid> {
        let id = meal.id();
        self.data.meals.push(meal);
        self.save().await?;
        Ok(id)
    }

    /// Remove a meal; `false` when no meal has that id
    pub async fn remove_meal(&mut self, id: Uuid) -> AppResult<bool> {
        let Some(index) = self.data.meals.iter().position(|m| m.id() == id) else {
            return Ok(false);
        };
        self.data.meals.remove(index);
        self.save().await?;
        Ok(true)
    }

    pub async fn update_profile(&mut self, profile: UserProfile) -> AppResult<()> {
        self.data.user_profile = profile;
        self.save().await
    }

    pub async fn presets(&self) -> Arc<PresetData> {
        self.store.load_presets().await
    }

    /// Receiver that sees the `last_modified` stamp after every save
    pub fn subscribe(&self) -> watch::Receiver<NaiveDateTime> {
        self.changes.subscribe()
    }
}
