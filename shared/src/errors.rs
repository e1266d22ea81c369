//! Error types shared by the tracker crates

use crate::validation::get_field_display_label;
use thiserror::Error;

/// Rejected user input, carrying a message suitable for display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// User-facing label of the offending field
    pub fn display_label(&self) -> &str {
        get_field_display_label(&self.field)
    }
}

/// A persisted duration that is not a valid time span
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time span: {0:?}")]
pub struct InvalidTimeSpan(pub String);
