//! Data models for the fitness tracker
//!
//! Every record here is persisted with camelCase field names. Missing fields
//! fall back to the same defaults a freshly created record would get, so
//! files written by older versions still load.

use crate::timespan;
use chrono::{Duration, Local, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// An enum value as found in data files: written by name, or by declaration
/// index in files from earlier versions
#[derive(Deserialize)]
#[serde(untagged)]
enum NameOrIndex {
    Index(u64),
    Name(String),
}

fn enum_from_stored<'de, D, T>(deserializer: D, variants: &[T]) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Copy + std::str::FromStr<Err = String>,
{
    match NameOrIndex::deserialize(deserializer)? {
        NameOrIndex::Index(index) => usize::try_from(index)
            .ok()
            .and_then(|i| variants.get(i).copied())
            .ok_or_else(|| D::Error::custom(format!("enum index {} out of range", index))),
        NameOrIndex::Name(name) => name.parse().map_err(D::Error::custom),
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// Kind of exercise session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExerciseType {
    Running,
    Swimming,
    Weightlifting,
    Cycling,
    Walking,
    Yoga,
    #[serde(rename = "HIIT")]
    Hiit,
    Rowing,
    Elliptical,
    Other,
}

impl ExerciseType {
    /// All exercise types in declaration order
    pub const ALL: [ExerciseType; 10] = [
        ExerciseType::Running,
        ExerciseType::Swimming,
        ExerciseType::Weightlifting,
        ExerciseType::Cycling,
        ExerciseType::Walking,
        ExerciseType::Yoga,
        ExerciseType::Hiit,
        ExerciseType::Rowing,
        ExerciseType::Elliptical,
        ExerciseType::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExerciseType::Running => "Running",
            ExerciseType::Swimming => "Swimming",
            ExerciseType::Weightlifting => "Weightlifting",
            ExerciseType::Cycling => "Cycling",
            ExerciseType::Walking => "Walking",
            ExerciseType::Yoga => "Yoga",
            ExerciseType::Hiit => "HIIT",
            ExerciseType::Rowing => "Rowing",
            ExerciseType::Elliptical => "Elliptical",
            ExerciseType::Other => "Other",
        }
    }
}

impl<'de> Deserialize<'de> for ExerciseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enum_from_stored(deserializer, &ExerciseType::ALL)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExerciseType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown exercise type: {}", s))
    }
}

/// A single recorded exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    #[serde(default = "local_now")]
    pub date: NaiveDateTime,
    #[serde(with = "timespan", default = "Duration::zero")]
    pub duration: Duration,
    #[serde(default)]
    pub calories_burned: f64,
    #[serde(default)]
    pub notes: String,
}

impl Exercise {
    /// Create an exercise with a freshly assigned id
    pub fn new(
        exercise_type: ExerciseType,
        date: NaiveDateTime,
        duration: Duration,
        calories_burned: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_type,
            date,
            duration,
            calories_burned,
            notes: notes.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

// ============================================================================
// Nutrition and meals
// ============================================================================

/// Nutritional values of one serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbohydrates_grams: f64,
    pub fat_grams: f64,
}

impl NutritionInfo {
    pub fn new(calories: f64, protein_grams: f64, carbohydrates_grams: f64, fat_grams: f64) -> Self {
        Self {
            calories,
            protein_grams,
            carbohydrates_grams,
            fat_grams,
        }
    }

    /// Values multiplied by a serving size
    pub fn scaled(&self, servings: f64) -> Self {
        Self {
            calories: self.calories * servings,
            protein_grams: self.protein_grams * servings,
            carbohydrates_grams: self.carbohydrates_grams * servings,
            fat_grams: self.fat_grams * servings,
        }
    }
}

fn default_serving_size() -> f64 {
    1.0
}

/// A meal or food item the user ate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default = "local_now")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub nutrition: NutritionInfo,
    /// Multiplier over the standard serving (1.0 = one serving)
    #[serde(default = "default_serving_size")]
    pub serving_size: f64,
    #[serde(default)]
    pub notes: String,
}

impl Meal {
    /// Create a meal with a freshly assigned id
    pub fn new(
        name: impl Into<String>,
        date: NaiveDateTime,
        nutrition: NutritionInfo,
        serving_size: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            nutrition,
            serving_size,
            notes: notes.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Calories eaten, taking the serving size into account
    pub fn total_calories(&self) -> f64 {
        self.nutrition.calories * self.serving_size
    }

    /// All nutrition values for the eaten amount
    pub fn totals(&self) -> NutritionInfo {
        self.nutrition.scaled(self.serving_size)
    }
}

// ============================================================================
// Profile and goals
// ============================================================================

/// Biological gender used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        enum_from_stored(deserializer, &[Gender::Male, Gender::Female])
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Weekly targets the dashboard measures progress against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeeklyGoals {
    pub calories_burned_target: f64,
    pub calories_consumed_target: f64,
    pub exercise_count_target: i32,
}

impl Default for WeeklyGoals {
    fn default() -> Self {
        Self {
            calories_burned_target: 2000.0,
            calories_consumed_target: 14000.0,
            exercise_count_target: 5,
        }
    }
}

/// The user's body measurements and goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Age in years
    pub age: i32,
    pub gender: Gender,
    pub goals: WeeklyGoals,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            weight_kg: 70.0,
            height_cm: 170.0,
            age: 30,
            gender: Gender::Male,
            goals: WeeklyGoals::default(),
        }
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Template for a new exercise entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePreset {
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub name: String,
    /// Average burn rate for a 70 kg person
    pub calories_per_minute: f64,
    #[serde(default)]
    pub description: String,
}

/// Template for a new meal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPreset {
    pub name: String,
    /// Breakfast, Lunch, Dinner or Snack by convention
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub nutrition: NutritionInfo,
    #[serde(default)]
    pub description: String,
}

/// Contents of the read-only presets document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetData {
    pub exercise_presets: Vec<ExercisePreset>,
    pub meal_presets: Vec<MealPreset>,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Everything the user has recorded
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessData {
    pub user_profile: UserProfile,
    pub exercises: Vec<Exercise>,
    pub meals: Vec<Meal>,
    pub last_modified: NaiveDateTime,
}

impl FitnessData {
    pub fn new(user_profile: UserProfile, exercises: Vec<Exercise>, meals: Vec<Meal>) -> Self {
        Self {
            user_profile,
            exercises,
            meals,
            last_modified: local_now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty() && self.meals.is_empty()
    }
}

impl Default for FitnessData {
    fn default() -> Self {
        Self::new(UserProfile::default(), Vec::new(), Vec::new())
    }
}
