//! Fitness Tracker Shared Library
//!
//! Domain types, calorie calculations, statistics and input validation used
//! by the tracker application. Nothing in this crate performs I/O.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod presets;
pub mod statistics;
pub mod timespan;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use presets::default_presets;
pub use statistics::{goal_progress, Statistics, StatisticsSummary};
pub use types::*;
pub use validation::{validate_profile, ExerciseInput, MealInput};
