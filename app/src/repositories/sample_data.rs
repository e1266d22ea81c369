//! Sample entries seeded into an empty data directory

use chrono::{Duration, NaiveDateTime, NaiveTime};
use fitness_tracker_shared::{Exercise, ExerciseType, Meal, NutritionInfo};

/// Five exercises spread over the past week, relative to `now`
pub fn sample_exercises(now: NaiveDateTime) -> Vec<Exercise> {
    let session = |days: i64, exercise_type, minutes: i64, calories: f64, notes: &str| {
        Exercise::new(
            exercise_type,
            now - Duration::days(days),
            Duration::minutes(minutes),
            calories,
            notes,
        )
    };

    vec![
        session(1, ExerciseType::Running, 30, 300.0, "Morning jog in the park"),
        session(2, ExerciseType::Weightlifting, 45, 225.0, "Upper body workout"),
        session(3, ExerciseType::Cycling, 60, 540.0, "Evening bike ride"),
        session(5, ExerciseType::Swimming, 40, 320.0, "Freestyle swimming"),
        session(6, ExerciseType::Yoga, 50, 150.0, "Relaxing yoga session"),
    ]
}

/// Five meals from the last two days, relative to `now`
pub fn sample_meals(now: NaiveDateTime) -> Vec<Meal> {
    let at = |days: i64, hour: i64| {
        (now.date() - Duration::days(days)).and_time(NaiveTime::default()) + Duration::hours(hour)
    };
    let meal = |name: &str, when, nutrition, notes: &str| Meal::new(name, when, nutrition, 1.0, notes);

    vec![
        meal(
            "Oatmeal with Berries",
            at(1, 8),
            NutritionInfo::new(350.0, 12.0, 55.0, 8.0),
            "Breakfast",
        ),
        meal(
            "Grilled Chicken Salad",
            at(1, 13),
            NutritionInfo::new(450.0, 42.0, 20.0, 22.0),
            "Lunch",
        ),
        meal(
            "Salmon with Brown Rice",
            at(1, 19),
            NutritionInfo::new(570.0, 45.0, 45.0, 22.0),
            "Dinner",
        ),
        meal(
            "Protein Shake",
            at(2, 10),
            NutritionInfo::new(180.0, 30.0, 8.0, 3.0),
            "Post-workout snack",
        ),
        meal(
            "Greek Yogurt with Almonds",
            at(2, 15),
            NutritionInfo::new(280.0, 18.0, 20.0, 14.0),
            "Afternoon snack",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    #[test]
    fn test_sample_exercises_are_relative_to_now() {
        let exercises = sample_exercises(now());
        assert_eq!(exercises.len(), 5);
        assert_eq!(exercises[0].date, now() - Duration::days(1));
        assert_eq!(exercises[4].exercise_type, ExerciseType::Yoga);
        assert_eq!(exercises.iter().map(|e| e.calories_burned).sum::<f64>(), 1535.0);
    }

    #[test]
    fn test_sample_meals_use_fixed_hours() {
        let meals = sample_meals(now());
        assert_eq!(meals.len(), 5);
        assert_eq!(
            meals[0].date,
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(8, 0, 0).unwrap()
        );
        assert_eq!(
            meals[4].date,
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(15, 0, 0).unwrap()
        );
        assert!(meals.iter().all(|m| m.serving_size == 1.0));
    }
}
