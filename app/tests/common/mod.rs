//! Common test utilities for integration tests
//!
//! Each test gets its own temporary data directory, removed on drop.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use fitness_tracker_app::error::AppResult;
use fitness_tracker_app::repositories::{FitnessRepository, FitnessStore, JsonFileStore};
use fitness_tracker_shared::{
    default_presets, Exercise, ExerciseType, FitnessData, Meal, NutritionInfo, PresetData, UserProfile,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Test application wrapper around a temporary data directory
pub struct TestApp {
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn presets_file(&self) -> PathBuf {
        self.dir.path().join("default_data.json")
    }

    /// A fresh store over the test directory
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(self.data_dir(), self.presets_file())
    }

    /// Open a repository, seeding sample data if the directory is empty
    pub async fn open(&self) -> FitnessRepository<JsonFileStore> {
        FitnessRepository::open(self.store())
            .await
            .expect("Failed to open repository")
    }

    /// Write raw text into a data file
    pub fn write_data_file(&self, name: &str, contents: &str) {
        std::fs::create_dir_all(self.data_dir()).unwrap();
        std::fs::write(self.data_dir().join(name), contents).unwrap();
    }

    pub fn read_data_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.data_dir().join(name)).unwrap()
    }

    pub fn write_presets(&self, contents: &str) {
        std::fs::write(self.presets_file(), contents).unwrap();
    }
}

/// In-memory store that counts how often each operation runs
#[derive(Default, Clone)]
pub struct MemoryStore {
    pub data: Arc<Mutex<Option<FitnessData>>>,
    pub saves: Arc<AtomicUsize>,
    pub preset_loads: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn with_data(data: FitnessData) -> Self {
        Self {
            data: Arc::new(Mutex::new(Some(data))),
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Option<FitnessData> {
        self.data.lock().unwrap().clone()
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    async fn load_data(&self) -> FitnessData {
        self.data.lock().unwrap().clone().unwrap_or_default()
    }

    async fn save_data(&self, data: &FitnessData) -> AppResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.data.lock().unwrap() = Some(data.clone());
        Ok(())
    }

    async fn load_presets(&self) -> Arc<PresetData> {
        self.preset_loads.fetch_add(1, Ordering::SeqCst);
        Arc::new(default_presets().clone())
    }
}

/// Wednesday, used as "today" by statistics tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
}

pub fn days_ago(days: i64, hour: u32) -> NaiveDateTime {
    (today() - Duration::days(days)).and_hms_opt(hour, 0, 0).unwrap()
}

pub fn running(when: NaiveDateTime, calories: f64) -> Exercise {
    Exercise::new(ExerciseType::Running, when, Duration::minutes(30), calories, "")
}

pub fn snack(name: &str, when: NaiveDateTime, calories: f64) -> Meal {
    Meal::new(name, when, NutritionInfo::new(calories, 5.0, 20.0, 5.0), 1.0, "")
}

/// Data with one exercise and one meal so nothing gets seeded
pub fn minimal_data() -> FitnessData {
    FitnessData::new(
        UserProfile::default(),
        vec![running(days_ago(0, 7), 300.0)],
        vec![snack("Apple", days_ago(0, 10), 95.0)],
    )
}
