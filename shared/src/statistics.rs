//! Statistics over recorded exercises and meals
//!
//! [`Statistics`] borrows a snapshot of the user's data together with the
//! date to treat as "today" and recomputes every figure on demand. Nothing is
//! cached, so a fresh view always reflects the latest snapshot.

use crate::health_metrics::round_to;
use crate::models::{ExerciseType, FitnessData, WeeklyGoals};
use crate::types::DateRange;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Percentage of a target achieved, clamped to `[0, 100]`
///
/// A target that is zero, negative or not a number yields 0.
pub fn goal_progress(achieved: f64, target: f64) -> f64 {
    if !(target > 0.0) {
        return 0.0;
    }
    let percent = achieved / target * 100.0;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Read-only statistics view
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    data: &'a FitnessData,
    today: NaiveDate,
}

impl<'a> Statistics<'a> {
    pub fn new(data: &'a FitnessData, today: NaiveDate) -> Self {
        Self { data, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_week(&self) -> DateRange {
        DateRange::week_containing(self.today)
    }

    pub fn current_month(&self) -> DateRange {
        DateRange::month_containing(self.today)
    }

    // ========================================================================
    // Exercise figures
    // ========================================================================

    pub fn total_exercise_count(&self) -> usize {
        self.data.exercises.len()
    }

    pub fn total_calories_burned(&self) -> f64 {
        self.data.exercises.iter().map(|e| e.calories_burned).sum()
    }

    /// Calories burned by exercises dated between `start` and `end`, both inclusive
    pub fn calories_burned_in_period(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let period = DateRange::new(start, end);
        self.data
            .exercises
            .iter()
            .filter(|e| period.contains(e.date.date()))
            .map(|e| e.calories_burned)
            .sum()
    }

    /// Mean session length, truncated to whole milliseconds; zero with no sessions
    pub fn average_training_duration(&self) -> Duration {
        let count = self.data.exercises.len() as i64;
        if count == 0 {
            return Duration::zero();
        }
        let total_ms: i64 = self
            .data
            .exercises
            .iter()
            .map(|e| e.duration.num_milliseconds())
            .sum();
        Duration::milliseconds(total_ms / count)
    }

    /// The exercise type recorded most often
    ///
    /// On a tie the type whose first session appears earliest in the stored
    /// list wins.
    pub fn most_frequent_exercise_type(&self) -> Option<ExerciseType> {
        let mut counts: Vec<(ExerciseType, usize)> = Vec::new();
        for exercise in &self.data.exercises {
            match counts.iter_mut().find(|(t, _)| *t == exercise.exercise_type) {
                Some((_, count)) => *count += 1,
                None => counts.push((exercise.exercise_type, 1)),
            }
        }

        let mut best: Option<(ExerciseType, usize)> = None;
        for (exercise_type, count) in counts {
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((exercise_type, count));
            }
        }
        best.map(|(exercise_type, _)| exercise_type)
    }

    // ========================================================================
    // Meal figures
    // ========================================================================

    pub fn total_calories_consumed(&self) -> f64 {
        self.data.meals.iter().map(|m| m.total_calories()).sum()
    }

    /// Calories eaten in meals dated between `start` and `end`, both inclusive
    pub fn calories_consumed_in_period(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        let period = DateRange::new(start, end);
        self.data
            .meals
            .iter()
            .filter(|m| period.contains(m.date.date()))
            .map(|m| m.total_calories())
            .sum()
    }

    // ========================================================================
    // Week and month windows
    // ========================================================================

    pub fn weekly_calories_burned(&self) -> f64 {
        let week = self.current_week();
        self.calories_burned_in_period(week.start, week.end)
    }

    pub fn weekly_calories_consumed(&self) -> f64 {
        let week = self.current_week();
        self.calories_consumed_in_period(week.start, week.end)
    }

    pub fn weekly_exercise_count(&self) -> usize {
        let week = self.current_week();
        self.data
            .exercises
            .iter()
            .filter(|e| week.contains(e.date.date()))
            .count()
    }

    pub fn monthly_calories_burned(&self) -> f64 {
        let month = self.current_month();
        self.calories_burned_in_period(month.start, month.end)
    }

    pub fn monthly_calories_consumed(&self) -> f64 {
        let month = self.current_month();
        self.calories_consumed_in_period(month.start, month.end)
    }

    // ========================================================================
    // Goal progress
    // ========================================================================

    fn goals(&self) -> &WeeklyGoals {
        &self.data.user_profile.goals
    }

    pub fn weekly_burned_goal_progress(&self) -> f64 {
        goal_progress(self.weekly_calories_burned(), self.goals().calories_burned_target)
    }

    pub fn weekly_consumed_goal_progress(&self) -> f64 {
        goal_progress(self.weekly_calories_consumed(), self.goals().calories_consumed_target)
    }

    pub fn weekly_exercise_count_progress(&self) -> f64 {
        goal_progress(
            self.weekly_exercise_count() as f64,
            self.goals().exercise_count_target as f64,
        )
    }

    /// Snapshot of every figure the dashboard and statistics screens show
    pub fn summary(&self) -> StatisticsSummary {
        StatisticsSummary {
            today: self.today,
            week: self.current_week(),
            month: self.current_month(),
            goals: self.goals().clone(),
            total_exercises: self.total_exercise_count(),
            total_calories_burned: round_to(self.total_calories_burned(), 1),
            total_calories_consumed: round_to(self.total_calories_consumed(), 1),
            weekly_exercise_count: self.weekly_exercise_count(),
            weekly_calories_burned: round_to(self.weekly_calories_burned(), 1),
            weekly_calories_consumed: round_to(self.weekly_calories_consumed(), 1),
            monthly_calories_burned: round_to(self.monthly_calories_burned(), 1),
            monthly_calories_consumed: round_to(self.monthly_calories_consumed(), 1),
            average_duration_minutes: self.average_training_duration().num_minutes(),
            most_frequent_exercise_type: self.most_frequent_exercise_type(),
            burned_goal_progress: round_to(self.weekly_burned_goal_progress(), 1),
            consumed_goal_progress: round_to(self.weekly_consumed_goal_progress(), 1),
            exercise_count_progress: round_to(self.weekly_exercise_count_progress(), 1),
        }
    }
}

/// Display-ready statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub today: NaiveDate,
    pub week: DateRange,
    pub month: DateRange,
    pub goals: WeeklyGoals,
    pub total_exercises: usize,
    pub total_calories_burned: f64,
    pub total_calories_consumed: f64,
    pub weekly_exercise_count: usize,
    pub weekly_calories_burned: f64,
    pub weekly_calories_consumed: f64,
    pub monthly_calories_burned: f64,
    pub monthly_calories_consumed: f64,
    pub average_duration_minutes: i64,
    pub most_frequent_exercise_type: Option<ExerciseType>,
    pub burned_goal_progress: f64,
    pub consumed_goal_progress: f64,
    pub exercise_count_progress: f64,
}
