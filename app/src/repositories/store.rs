//! Storage backends for the fitness repository
//!
//! A store reads and writes the three user documents and the read-only
//! presets document. Reading never fails: a missing or unreadable document
//! is replaced by its default, one document at a time.

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use fitness_tracker_shared::{default_presets, Exercise, FitnessData, Meal, PresetData, UserProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

pub const EXERCISES_FILE: &str = "exercises.json";
pub const MEALS_FILE: &str = "meals.json";
pub const PROFILE_FILE: &str = "profile.json";

/// Persistence contract used by [`super::FitnessRepository`]
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// Load everything the user has recorded, substituting defaults per document
    async fn load_data(&self) -> FitnessData;

    /// Write all user documents
    async fn save_data(&self, data: &FitnessData) -> AppResult<()>;

    /// Presets document, read at most once per store
    async fn load_presets(&self) -> Arc<PresetData>;
}

/// Store keeping each document as a pretty-printed JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    presets_file: PathBuf,
    presets: OnceCell<Arc<PresetData>>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>, presets_file: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            presets_file: presets_file.into(),
            presets: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn presets_file(&self) -> &Path {
        &self.presets_file
    }

    fn document_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    async fn write_document<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> AppResult<()> {
        let path = self.document_path(file_name);
        let json = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| AppError::io(&path, e))
    }
}

/// Read and parse a JSON document, or `None` when it is missing or malformed
async fn read_document<T: DeserializeOwned + Send>(path: &Path) -> Option<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Document not found, using defaults");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read document, using defaults");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Malformed document, using defaults");
            None
        }
    }
}

#[async_trait]
impl FitnessStore for JsonFileStore {
    async fn load_data(&self) -> FitnessData {
        let exercises: Vec<Exercise> = read_document(&self.document_path(EXERCISES_FILE))
            .await
            .unwrap_or_default();
        let meals: Vec<Meal> = read_document(&self.document_path(MEALS_FILE))
            .await
            .unwrap_or_default();
        let profile: UserProfile = read_document(&self.document_path(PROFILE_FILE))
            .await
            .unwrap_or_default();

        info!(
            data_dir = %self.data_dir.display(),
            exercises = exercises.len(),
            meals = meals.len(),
            "Loaded fitness data"
        );
        FitnessData::new(profile, exercises, meals)
    }

    async fn save_data(&self, data: &FitnessData) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| AppError::io(&self.data_dir, e))?;

        self.write_document(EXERCISES_FILE, &data.exercises).await?;
        self.write_document(MEALS_FILE, &data.meals).await?;
        self.write_document(PROFILE_FILE, &data.user_profile).await?;

        debug!(data_dir = %self.data_dir.display(), "Saved fitness data");
        Ok(())
    }

    async fn load_presets(&self) -> Arc<PresetData> {
        self.presets
            .get_or_init(|| async {
                match read_document::<PresetData>(&self.presets_file).await {
                    Some(presets) => {
                        debug!(path = %self.presets_file.display(), "Loaded presets");
                        Arc::new(presets)
                    }
                    None => Arc::new(default_presets().clone()),
                }
            })
            .await
            .clone()
    }
}
