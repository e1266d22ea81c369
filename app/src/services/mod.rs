//! Business logic services
//!
//! Services validate user input and coordinate the repository with the
//! shared calculators.

pub mod exercise;
pub mod meal;
pub mod profile;
pub mod statistics;

pub use exercise::ExerciseService;
pub use meal::MealService;
pub use profile::ProfileService;
pub use statistics::StatisticsService;
