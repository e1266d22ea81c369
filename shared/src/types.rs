//! Query types: date ranges and list filters
//!
//! Every list these helpers return is ordered most recent first. Entries
//! with identical timestamps keep their stored order.

use crate::models::{Exercise, ExerciseType, Meal};
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The Monday-based week containing `date`: seven days starting on the
    /// most recent Monday at or before it
    pub fn week_containing(date: NaiveDate) -> Self {
        let days_since_monday = date.weekday().num_days_from_monday() as i64;
        let start = date - Duration::days(days_since_monday);
        Self::new(start, start + Duration::days(6))
    }

    /// The calendar month containing `date`
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.day0() as i64);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self::new(start, end)
    }
}

/// Optional criteria for the exercise list; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseFilter {
    pub exercise_type: Option<ExerciseType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_duration: Option<Duration>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        let day = exercise.date.date();
        self.exercise_type.map_or(true, |t| exercise.exercise_type == t)
            && self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
            && self.min_duration.map_or(true, |min| exercise.duration >= min)
    }
}

/// Optional date criteria for the meal list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl MealFilter {
    pub fn matches(&self, meal: &Meal) -> bool {
        let day = meal.date.date();
        self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
    }
}

/// Exercises matching `filter`, most recent first
pub fn filter_exercises<'a>(exercises: &'a [Exercise], filter: &ExerciseFilter) -> Vec<&'a Exercise> {
    let mut matched: Vec<&Exercise> = exercises.iter().filter(|e| filter.matches(e)).collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// Meals matching `filter`, most recent first
pub fn filter_meals<'a>(meals: &'a [Meal], filter: &MealFilter) -> Vec<&'a Meal> {
    let mut matched: Vec<&Meal> = meals.iter().filter(|m| filter.matches(m)).collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// All exercises, most recent first
pub fn exercises_by_recency(exercises: &[Exercise]) -> Vec<&Exercise> {
    filter_exercises(exercises, &ExerciseFilter::default())
}

/// All meals, most recent first
pub fn meals_by_recency(meals: &[Meal]) -> Vec<&Meal> {
    filter_meals(meals, &MealFilter::default())
}
