//! Input validation
//!
//! Entry forms collect raw input and turn it into records only once every
//! field checks out. Checks run in a fixed order and stop at the first
//! failure, whose message is shown to the user as is.

use crate::errors::ValidationError;
use crate::health_metrics::{calories_burned, round_to};
use crate::models::{
    local_now, Exercise, ExercisePreset, ExerciseType, Meal, MealPreset, NutritionInfo, UserProfile,
};
use crate::timespan::MAX_MINUTES;
use chrono::{Duration, NaiveDateTime};

/// Parse user-typed numeric text; blanks, junk and non-finite values give `None`
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// Meal entry
// ============================================================================

/// A meal as typed into the entry form
#[derive(Debug, Clone, PartialEq)]
pub struct MealInput {
    pub name: String,
    pub date: NaiveDateTime,
    pub calories: String,
    pub protein_grams: String,
    pub carbohydrates_grams: String,
    pub fat_grams: String,
    pub serving_size: f64,
    pub notes: String,
}

impl Default for MealInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: local_now(),
            calories: String::new(),
            protein_grams: String::new(),
            carbohydrates_grams: String::new(),
            fat_grams: String::new(),
            serving_size: 1.0,
            notes: String::new(),
        }
    }
}

impl MealInput {
    /// Form pre-filled from a preset; the preset's category becomes the note
    pub fn from_preset(preset: &MealPreset, date: NaiveDateTime) -> Self {
        Self {
            name: preset.name.clone(),
            date,
            calories: preset.nutrition.calories.to_string(),
            protein_grams: preset.nutrition.protein_grams.to_string(),
            carbohydrates_grams: preset.nutrition.carbohydrates_grams.to_string(),
            fat_grams: preset.nutrition.fat_grams.to_string(),
            serving_size: 1.0,
            notes: preset.category.clone(),
        }
    }

    /// Check the form and build the meal it describes
    pub fn validate(&self) -> Result<Meal, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::new("name", "Meal name is required."));
        }

        let calories = parse_number(&self.calories)
            .filter(|c| *c > 0.0)
            .ok_or_else(|| ValidationError::new("calories", "Calories must be a positive number."))?;
        let protein = non_negative(
            &self.protein_grams,
            "protein_grams",
            "Protein must be a valid number (0 or greater).",
        )?;
        let carbohydrates = non_negative(
            &self.carbohydrates_grams,
            "carbohydrates_grams",
            "Carbohydrates must be a valid number (0 or greater).",
        )?;
        let fat = non_negative(&self.fat_grams, "fat_grams", "Fat must be a valid number (0 or greater).")?;

        if !(self.serving_size > 0.0) || !self.serving_size.is_finite() {
            return Err(ValidationError::new(
                "serving_size",
                "Serving size must be greater than 0.",
            ));
        }

        Ok(Meal::new(
            name,
            self.date,
            NutritionInfo::new(calories, protein, carbohydrates, fat),
            self.serving_size,
            self.notes.trim(),
        ))
    }
}

fn non_negative(text: &str, field: &str, message: &str) -> Result<f64, ValidationError> {
    parse_number(text)
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| ValidationError::new(field, message))
}

// ============================================================================
// Exercise entry
// ============================================================================

/// An exercise session as entered by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseInput {
    pub exercise_type: ExerciseType,
    pub date: NaiveDateTime,
    pub duration_minutes: i64,
    /// Explicit burn; when absent it is estimated from `calories_per_minute`
    pub calories_burned: Option<f64>,
    /// Burn rate for a 70 kg person, usually taken from a preset
    pub calories_per_minute: Option<f64>,
    pub notes: String,
}

impl ExerciseInput {
    pub fn new(exercise_type: ExerciseType, date: NaiveDateTime, duration_minutes: i64) -> Self {
        Self {
            exercise_type,
            date,
            duration_minutes,
            calories_burned: None,
            calories_per_minute: None,
            notes: String::new(),
        }
    }

    /// Input using a preset's type and burn rate
    pub fn from_preset(preset: &ExercisePreset, date: NaiveDateTime, duration_minutes: i64) -> Self {
        Self {
            calories_per_minute: Some(preset.calories_per_minute),
            notes: preset.name.clone(),
            ..Self::new(preset.exercise_type, date, duration_minutes)
        }
    }

    /// Burn estimate for a user of the given weight, rounded to one decimal
    pub fn estimated_calories(&self, user_weight_kg: f64) -> Option<f64> {
        let rate = self.calories_per_minute?;
        Some(round_to(
            calories_burned(rate, self.duration_minutes as f64, user_weight_kg),
            1,
        ))
    }

    /// Check the input and build the exercise; missing calories count as 0
    pub fn validate(&self) -> Result<Exercise, ValidationError> {
        if self.duration_minutes <= 0 {
            return Err(ValidationError::new(
                "duration",
                "Duration must be greater than 0 minutes.",
            ));
        }
        let too_long = || {
            ValidationError::new(
                "duration",
                format!("Duration must be at most {} minutes.", MAX_MINUTES),
            )
        };
        if self.duration_minutes > MAX_MINUTES {
            return Err(too_long());
        }
        let duration = Duration::try_minutes(self.duration_minutes).ok_or_else(too_long)?;

        let calories = self.calories_burned.unwrap_or(0.0);
        if !calories.is_finite() || calories < 0.0 {
            return Err(ValidationError::new(
                "calories_burned",
                "Calories burned must be 0 or greater.",
            ));
        }

        Ok(Exercise::new(
            self.exercise_type,
            self.date,
            duration,
            calories,
            self.notes.trim(),
        ))
    }
}

// ============================================================================
// Profile Validation
// ============================================================================

/// Check body measurements and weekly goals before a profile is saved
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    positive("weight_kg", profile.weight_kg)?;
    positive("height_cm", profile.height_cm)?;
    positive("age", profile.age as f64)?;

    let goals = &profile.goals;
    not_negative("calories_burned_target", goals.calories_burned_target)?;
    not_negative("calories_consumed_target", goals.calories_consumed_target)?;
    not_negative("exercise_count_target", goals.exercise_count_target as f64)?;
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("{} must be greater than 0.", get_field_display_label(field)),
        ))
    }
}

fn not_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("{} must be 0 or greater.", get_field_display_label(field)),
        ))
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "calories" => "Calories",
        "protein_grams" => "Protein",
        "carbohydrates_grams" => "Carbohydrates",
        "fat_grams" => "Fat",
        "serving_size" => "Serving Size",
        "duration" => "Duration",
        "calories_burned" => "Calories Burned",
        "weight_kg" => "Weight",
        "height_cm" => "Height",
        "age" => "Age",
        "calories_burned_target" => "Weekly Calories Burned Goal",
        "calories_consumed_target" => "Weekly Calories Consumed Goal",
        "exercise_count_target" => "Weekly Exercise Goal",
        _ => field_name,
    }
}
