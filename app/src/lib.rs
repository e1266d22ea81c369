//! Fitness Tracker Application Library
//!
//! Configuration, storage, services and the text shell. Exposed as a
//! library for the binary and the integration tests.

pub mod config;
pub mod error;
pub mod repositories;
pub mod services;
pub mod shell;

pub use error::{AppError, AppResult};
