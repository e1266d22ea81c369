//! Calorie calculations
//!
//! Calorie burn estimates, Basal Metabolic Rate (Mifflin-St Jeor) and Total
//! Daily Energy Expenditure. Every function here is pure: inputs are assumed
//! to be valid numbers, and nonsensical inputs (zero weight, negative age)
//! give mathematically valid but meaningless results. Callers validate first.

use crate::models::{ExercisePreset, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Body weight the preset burn rates are quoted for
pub const REFERENCE_WEIGHT_KG: f64 = 70.0;

/// Multiplier used for the recommended daily intake
pub const MODERATE_ACTIVITY_MULTIPLIER: f64 = 1.55;

// ============================================================================
// Activity levels
// ============================================================================

/// Activity level bands for TDEE multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Band a raw multiplier falls into; upper bounds are inclusive
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier <= 1.2 {
            ActivityLevel::Sedentary
        } else if multiplier <= 1.375 {
            ActivityLevel::LightlyActive
        } else if multiplier <= 1.55 {
            ActivityLevel::ModeratelyActive
        } else if multiplier <= 1.725 {
            ActivityLevel::VeryActive
        } else {
            ActivityLevel::ExtraActive
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (moderate exercise 3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (hard exercise 6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (very hard exercise & physical job)",
        }
    }
}

/// Describe the activity level a multiplier corresponds to
pub fn activity_level_description(multiplier: f64) -> &'static str {
    ActivityLevel::from_multiplier(multiplier).description()
}

// ============================================================================
// Calorie burn
// ============================================================================

/// Estimate calories burned, scaling a 70 kg burn rate by body weight
///
/// calories = rate × minutes × (weight / 70)
pub fn calories_burned(calories_per_minute: f64, duration_minutes: f64, user_weight_kg: f64) -> f64 {
    let weight_factor = user_weight_kg / REFERENCE_WEIGHT_KG;
    calories_per_minute * duration_minutes * weight_factor
}

impl ExercisePreset {
    /// Estimated burn for this preset at the given duration and weight
    pub fn calories_burned(&self, duration_minutes: f64, user_weight_kg: f64) -> f64 {
        calories_burned(self.calories_per_minute, duration_minutes, user_weight_kg)
    }
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Daily intake recommendation assuming moderate activity
pub fn recommended_daily_calories(profile: &UserProfile) -> f64 {
    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender);
    calculate_tdee(bmr, MODERATE_ACTIVITY_MULTIPLIER)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Whole-calorie BMR and intake figures shown on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    pub bmr: f64,
    pub recommended_daily_calories: f64,
}

impl ProfileMetrics {
    /// Metrics for a profile, or `None` while any body measurement is not positive
    pub fn for_profile(profile: &UserProfile) -> Option<Self> {
        if profile.weight_kg <= 0.0 || profile.height_cm <= 0.0 || profile.age <= 0 {
            return None;
        }
        let bmr = round_to(
            calculate_bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender),
            0,
        );
        Some(Self {
            bmr,
            recommended_daily_calories: round_to(calculate_tdee(bmr, MODERATE_ACTIVITY_MULTIPLIER), 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseType;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // Calorie burn
    // =========================================================================

    #[test]
    fn test_calories_burned_reference_weight() {
        // 10 kcal/min for 30 min at the reference weight
        assert_eq!(calories_burned(10.0, 30.0, 70.0), 300.0);
    }

    #[test]
    fn test_preset_calories_burned() {
        let preset = ExercisePreset {
            exercise_type: ExerciseType::Cycling,
            name: "Cycling (moderate)".to_string(),
            calories_per_minute: 9.0,
            description: String::new(),
        };
        assert_eq!(preset.calories_burned(60.0, 70.0), 540.0);
        assert_eq!(preset.calories_burned(60.0, 140.0), 1080.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: doubling the duration doubles the burn
        #[test]
        fn prop_burn_linear_in_duration(
            rate in 1.0f64..20.0,
            minutes in 1.0f64..240.0,
            weight in 30.0f64..200.0
        ) {
            let single = calories_burned(rate, minutes, weight);
            let double = calories_burned(rate, minutes * 2.0, weight);
            prop_assert!((double - 2.0 * single).abs() < 1e-9);
        }

        /// Property: a 140 kg user burns twice what a 70 kg user does
        #[test]
        fn prop_burn_scales_with_weight(rate in 1.0f64..20.0, minutes in 1.0f64..240.0) {
            let reference = calories_burned(rate, minutes, 70.0);
            let heavy = calories_burned(rate, minutes, 140.0);
            prop_assert!((heavy - 2.0 * reference).abs() < 1e-9);
        }
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin_exact() {
        // 700 + 1062.5 - 150 + 5
        assert_eq!(calculate_bmr(70.0, 170.0, 30, Gender::Male), 1617.5);
        // 700 + 1062.5 - 150 - 161
        assert_eq!(calculate_bmr(70.0, 170.0, 30, Gender::Female), 1451.5);
        // 600 + 1031.25 - 125 - 161
        assert_eq!(calculate_bmr(60.0, 165.0, 25, Gender::Female), 1345.25);
    }

    #[test]
    fn test_tdee_is_product() {
        let bmr = calculate_bmr(80.0, 180.0, 30, Gender::Male);
        assert_eq!(calculate_tdee(bmr, 1.55), bmr * 1.55);
    }

    #[test]
    fn test_recommended_daily_calories_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(recommended_daily_calories(&profile), 1617.5 * 1.55);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Male BMR is exactly 166 above female BMR (same stats)
        #[test]
        fn prop_male_bmr_offset(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let male = calculate_bmr(weight, height, age, Gender::Male);
            let female = calculate_bmr(weight, height, age, Gender::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// Property: TDEE > BMR for every activity band
        #[test]
        fn prop_tdee_greater_than_bmr(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20i32..60
        ) {
            let bmr = calculate_bmr(weight, height, age, Gender::Female);
            for level in [ActivityLevel::Sedentary, ActivityLevel::ExtraActive] {
                prop_assert!(calculate_tdee(bmr, level.multiplier()) > bmr);
            }
        }
    }

    // =========================================================================
    // Activity levels
    // =========================================================================

    #[rstest]
    #[case(1.0, "Sedentary (little or no exercise)")]
    #[case(1.2, "Sedentary (little or no exercise)")]
    #[case(1.3, "Lightly active (light exercise 1-3 days/week)")]
    #[case(1.375, "Lightly active (light exercise 1-3 days/week)")]
    #[case(1.55, "Moderately active (moderate exercise 3-5 days/week)")]
    #[case(1.725, "Very active (hard exercise 6-7 days/week)")]
    #[case(1.9, "Extra active (very hard exercise & physical job)")]
    fn test_activity_level_description(#[case] multiplier: f64, #[case] expected: &str) {
        assert_eq!(activity_level_description(multiplier), expected);
    }

    #[test]
    fn test_activity_level_round_trips_its_multiplier() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ] {
            assert_eq!(ActivityLevel::from_multiplier(level.multiplier()), level);
        }
    }

    // =========================================================================
    // Profile metrics
    // =========================================================================

    #[test]
    fn test_profile_metrics_rounding() {
        let metrics = ProfileMetrics::for_profile(&UserProfile::default()).unwrap();
        // 1617.5 rounds half away from zero
        assert_eq!(metrics.bmr, 1618.0);
        // 1618 × 1.55 = 2507.9
        assert_eq!(metrics.recommended_daily_calories, 2508.0);
    }

    #[rstest]
    #[case(0.0, 170.0, 30)]
    #[case(70.0, 0.0, 30)]
    #[case(70.0, 170.0, 0)]
    #[case(-5.0, 170.0, 30)]
    fn test_profile_metrics_need_positive_measurements(
        #[case] weight_kg: f64,
        #[case] height_cm: f64,
        #[case] age: i32,
    ) {
        let profile = UserProfile {
            weight_kg,
            height_cm,
            age,
            ..UserProfile::default()
        };
        assert!(ProfileMetrics::for_profile(&profile).is_none());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(342.857142, 1), 342.9);
        assert_eq!(round_to(2507.9, 0), 2508.0);
    }
}
