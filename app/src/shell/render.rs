//! Plain-text rendering of each screen

use super::navigation::Screen;
use chrono::NaiveDate;
use fitness_tracker_shared::{
    activity_level_description, exercises_by_recency, meals_by_recency, Exercise, FitnessData, Meal,
    PresetData, ProfileMetrics, Statistics, MODERATE_ACTIVITY_MULTIPLIER,
};
use std::fmt::{self, Write};

/// Number of entries the dashboard lists per section
const RECENT_ENTRIES: usize = 5;
const PROGRESS_BAR_WIDTH: usize = 20;

/// Everything a screen may show
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub data: &'a FitnessData,
    pub presets: &'a PresetData,
    pub today: NaiveDate,
}

/// Render `screen` as text
pub fn render(screen: Screen, view: &View<'_>) -> String {
    let mut out = String::new();
    let _ = write_screen(&mut out, screen, view);
    out
}

fn write_screen(out: &mut String, screen: Screen, view: &View<'_>) -> fmt::Result {
    writeln!(out, "{}", screen.title())?;
    writeln!(out, "{}", "=".repeat(screen.title().len()))?;
    match screen {
        Screen::Dashboard => dashboard(out, view),
        Screen::Exercises => exercises(out, view),
        Screen::AddExercise => add_exercise(out, view),
        Screen::Meals => meals(out, view),
        Screen::AddMeal => add_meal(out, view),
        Screen::Statistics => statistics(out, view),
        Screen::Profile => profile(out, view),
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(PROGRESS_BAR_WIDTH - filled))
}

fn exercise_line(out: &mut String, exercise: &Exercise, with_id: bool) -> fmt::Result {
    write!(
        out,
        "  {}  {:<13} {:>4} min {:>8.1} kcal",
        exercise.date.format("%Y-%m-%d %H:%M"),
        exercise.exercise_type.name(),
        exercise.duration.num_minutes(),
        exercise.calories_burned,
    )?;
    if !exercise.notes.is_empty() {
        write!(out, "  {}", exercise.notes)?;
    }
    if with_id {
        write!(out, "  [{}]", exercise.id())?;
    }
    writeln!(out)
}

fn meal_line(out: &mut String, meal: &Meal, with_id: bool) -> fmt::Result {
    let totals = meal.totals();
    write!(
        out,
        "  {}  {:<28} {:>8.1} kcal  P {:.1}g  C {:.1}g  F {:.1}g",
        meal.date.format("%Y-%m-%d %H:%M"),
        meal.name,
        totals.calories,
        totals.protein_grams,
        totals.carbohydrates_grams,
        totals.fat_grams,
    )?;
    if meal.serving_size != 1.0 {
        write!(out, "  x{}", meal.serving_size)?;
    }
    if with_id {
        write!(out, "  [{}]", meal.id())?;
    }
    writeln!(out)
}

fn dashboard(out: &mut String, view: &View<'_>) -> fmt::Result {
    let stats = Statistics::new(view.data, view.today);
    let summary = stats.summary();
    let goals = &summary.goals;

    writeln!(
        out,
        "Welcome back, {}! Today is {}.",
        view.data.user_profile.name,
        view.today.format("%A, %B %-d")
    )?;
    writeln!(out)?;
    writeln!(out, "This week ({} to {})", summary.week.start, summary.week.end)?;
    writeln!(
        out,
        "  Calories burned    {} {:>5.1}%  {:.1} / {:.0} kcal",
        progress_bar(summary.burned_goal_progress),
        summary.burned_goal_progress,
        summary.weekly_calories_burned,
        goals.calories_burned_target,
    )?;
    writeln!(
        out,
        "  Calories consumed  {} {:>5.1}%  {:.1} / {:.0} kcal",
        progress_bar(summary.consumed_goal_progress),
        summary.consumed_goal_progress,
        summary.weekly_calories_consumed,
        goals.calories_consumed_target,
    )?;
    writeln!(
        out,
        "  Exercises          {} {:>5.1}%  {} / {}",
        progress_bar(summary.exercise_count_progress),
        summary.exercise_count_progress,
        summary.weekly_exercise_count,
        goals.exercise_count_target,
    )?;

    writeln!(out)?;
    writeln!(out, "Recent exercises")?;
    let recent = exercises_by_recency(&view.data.exercises);
    if recent.is_empty() {
        writeln!(out, "  No exercises recorded yet.")?;
    }
    for exercise in recent.into_iter().take(RECENT_ENTRIES) {
        exercise_line(out, exercise, false)?;
    }

    writeln!(out)?;
    writeln!(out, "Recent meals")?;
    let recent = meals_by_recency(&view.data.meals);
    if recent.is_empty() {
        writeln!(out, "  No meals recorded yet.")?;
    }
    for meal in recent.into_iter().take(RECENT_ENTRIES) {
        meal_line(out, meal, false)?;
    }
    Ok(())
}

fn exercises(out: &mut String, view: &View<'_>) -> fmt::Result {
    let all = exercises_by_recency(&view.data.exercises);
    if all.is_empty() {
        return writeln!(out, "No exercises recorded yet.");
    }
    writeln!(out, "{} sessions", all.len())?;
    for exercise in all {
        exercise_line(out, exercise, true)?;
    }
    Ok(())
}

fn add_exercise(out: &mut String, view: &View<'_>) -> fmt::Result {
    let weight = view.data.user_profile.weight_kg;
    writeln!(out, "Presets (estimate for 30 min at {} kg)", weight)?;
    for preset in &view.presets.exercise_presets {
        writeln!(
            out,
            "  {:<22} {:<13} {:>5.1} kcal/min  ~{:.1} kcal  {}",
            preset.name,
            preset.exercise_type.name(),
            preset.calories_per_minute,
            preset.calories_burned(30.0, weight),
            preset.description,
        )?;
    }
    writeln!(out)?;
    let types: Vec<&str> = fitness_tracker_shared::ExerciseType::ALL
        .iter()
        .map(|t| t.name())
        .collect();
    writeln!(out, "Exercise types: {}", types.join(", "))
}

fn meals(out: &mut String, view: &View<'_>) -> fmt::Result {
    let all = meals_by_recency(&view.data.meals);
    if all.is_empty() {
        return writeln!(out, "No meals recorded yet.");
    }
    writeln!(out, "{} meals", all.len())?;
    for meal in all {
        meal_line(out, meal, true)?;
    }
    Ok(())
}

fn add_meal(out: &mut String, view: &View<'_>) -> fmt::Result {
    writeln!(out, "Presets (per serving)")?;
    for preset in &view.presets.meal_presets {
        let n = &preset.nutrition;
        writeln!(
            out,
            "  {:<24} {:<10} {:>6.0} kcal  P {}g  C {}g  F {}g",
            preset.name, preset.category, n.calories, n.protein_grams, n.carbohydrates_grams, n.fat_grams,
        )?;
    }
    Ok(())
}

fn statistics(out: &mut String, view: &View<'_>) -> fmt::Result {
    let summary = Statistics::new(view.data, view.today).summary();

    writeln!(out, "Exercise")?;
    writeln!(out, "  Total sessions          {}", summary.total_exercises)?;
    writeln!(out, "  Total calories burned   {:.1} kcal", summary.total_calories_burned)?;
    writeln!(out, "  Average duration        {} min", summary.average_duration_minutes)?;
    match summary.most_frequent_exercise_type {
        Some(exercise_type) => writeln!(out, "  Most frequent           {}", exercise_type)?,
        None => writeln!(out, "  Most frequent           -")?,
    }
    writeln!(out, "  Burned this week        {:.1} kcal", summary.weekly_calories_burned)?;
    writeln!(out, "  Burned this month       {:.1} kcal", summary.monthly_calories_burned)?;
    writeln!(out)?;
    writeln!(out, "Nutrition")?;
    writeln!(out, "  Total calories consumed {:.1} kcal", summary.total_calories_consumed)?;
    writeln!(out, "  Consumed this week      {:.1} kcal", summary.weekly_calories_consumed)?;
    writeln!(out, "  Consumed this month     {:.1} kcal", summary.monthly_calories_consumed)?;
    writeln!(out)?;
    writeln!(out, "Weekly goals")?;
    writeln!(out, "  Calories burned         {:.1}%", summary.burned_goal_progress)?;
    writeln!(out, "  Calories consumed       {:.1}%", summary.consumed_goal_progress)?;
    writeln!(out, "  Exercise sessions       {:.1}%", summary.exercise_count_progress)
}

fn profile(out: &mut String, view: &View<'_>) -> fmt::Result {
    let profile = &view.data.user_profile;
    writeln!(out, "  Name     {}", profile.name)?;
    writeln!(out, "  Weight   {} kg", profile.weight_kg)?;
    writeln!(out, "  Height   {} cm", profile.height_cm)?;
    writeln!(out, "  Age      {}", profile.age)?;
    writeln!(out, "  Gender   {}", profile.gender)?;
    writeln!(out)?;
    writeln!(out, "Weekly goals")?;
    writeln!(out, "  Calories burned    {} kcal", profile.goals.calories_burned_target)?;
    writeln!(out, "  Calories consumed  {} kcal", profile.goals.calories_consumed_target)?;
    writeln!(out, "  Exercise sessions  {}", profile.goals.exercise_count_target)?;
    writeln!(out)?;
    match ProfileMetrics::for_profile(profile) {
        Some(metrics) => {
            writeln!(out, "  BMR                        {:.0} kcal/day", metrics.bmr)?;
            writeln!(
                out,
                "  Recommended daily calories {:.0} kcal/day",
                metrics.recommended_daily_calories
            )?;
            writeln!(
                out,
                "  Assumes {}",
                activity_level_description(MODERATE_ACTIVITY_MULTIPLIER).to_lowercase()
            )
        }
        None => writeln!(out, "  Enter weight, height and age to see BMR and daily calories."),
    }
}
