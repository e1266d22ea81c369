//! Built-in exercise and meal presets
//!
//! Used whenever the presets document cannot be read.

use crate::models::{ExercisePreset, ExerciseType, MealPreset, NutritionInfo, PresetData};
use once_cell::sync::Lazy;

static DEFAULT_PRESETS: Lazy<PresetData> = Lazy::new(|| PresetData {
    exercise_presets: vec![
        exercise(ExerciseType::Running, "Running (moderate)", 10.0, "Jogging at 8-10 km/h"),
        exercise(ExerciseType::Running, "Running (fast)", 14.0, "Running at 12+ km/h"),
        exercise(ExerciseType::Swimming, "Swimming (freestyle)", 8.0, "Moderate freestyle"),
        exercise(ExerciseType::Weightlifting, "Weight Training", 5.0, "General weight training"),
        exercise(ExerciseType::Cycling, "Cycling (moderate)", 9.0, "Cycling at 20-25 km/h"),
        exercise(ExerciseType::Walking, "Walking (brisk)", 4.5, "Brisk walking"),
        exercise(ExerciseType::Yoga, "Yoga", 3.0, "Hatha yoga"),
        exercise(ExerciseType::Hiit, "HIIT Workout", 12.0, "High-intensity interval"),
    ],
    meal_presets: vec![
        meal("Oatmeal with Berries", "Breakfast", 350.0, 12.0, 55.0, 8.0),
        meal("Scrambled Eggs", "Breakfast", 200.0, 14.0, 2.0, 15.0),
        meal("Grilled Chicken Breast", "Lunch", 280.0, 53.0, 0.0, 6.0),
        meal("Caesar Salad", "Lunch", 320.0, 8.0, 12.0, 28.0),
        meal("Salmon Fillet", "Dinner", 350.0, 40.0, 0.0, 20.0),
        meal("Brown Rice", "Dinner", 220.0, 5.0, 45.0, 2.0),
        meal("Protein Shake", "Snack", 180.0, 30.0, 8.0, 3.0),
        meal("Apple", "Snack", 95.0, 0.5, 25.0, 0.3),
    ],
});

fn exercise(exercise_type: ExerciseType, name: &str, calories_per_minute: f64, description: &str) -> ExercisePreset {
    ExercisePreset {
        exercise_type,
        name: name.to_string(),
        calories_per_minute,
        description: description.to_string(),
    }
}

fn meal(name: &str, category: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> MealPreset {
    MealPreset {
        name: name.to_string(),
        category: category.to_string(),
        nutrition: NutritionInfo::new(calories, protein, carbs, fat),
        description: String::new(),
    }
}

/// The built-in preset set
pub fn default_presets() -> &'static PresetData {
    &DEFAULT_PRESETS
}

impl PresetData {
    /// Exercise preset by name, ignoring case
    pub fn exercise_preset(&self, name: &str) -> Option<&ExercisePreset> {
        let name = name.trim();
        self.exercise_presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Meal preset by name, ignoring case
    pub fn meal_preset(&self, name: &str) -> Option<&MealPreset> {
        let name = name.trim();
        self.meal_presets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// First exercise preset of a type
    pub fn preset_for_type(&self, exercise_type: ExerciseType) -> Option<&ExercisePreset> {
        self.exercise_presets
            .iter()
            .find(|p| p.exercise_type == exercise_type)
    }
}
