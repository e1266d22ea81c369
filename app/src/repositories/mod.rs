//! Data access layer
//!
//! [`FitnessRepository`] owns the user's data and persists it through a
//! [`FitnessStore`]; [`JsonFileStore`] is the file-backed store.

pub mod fitness;
pub mod sample_data;
pub mod store;

pub use fitness::FitnessRepository;
pub use store::{FitnessStore, JsonFileStore, EXERCISES_FILE, MEALS_FILE, PROFILE_FILE};
