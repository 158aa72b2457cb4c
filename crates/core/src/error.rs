//! Error types for Prompt Forge.
//!
//! This module defines a unified error enum covering all failure
//! categories: caller input errors surfaced by the engine (unknown
//! category, missing slot, missing section, empty prompt) and
//! infrastructure errors (I/O, configuration, serialization).

use thiserror::Error;

/// Unified error type for Prompt Forge.
///
/// All fallible functions return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
///
/// The first four variants are local-validation failures: they are
/// detected before any output is produced, carry the offending
/// name/value, and are never retried.
#[derive(Error, Debug)]
pub enum AppError {
    /// The category string does not name one of the five known categories
    #[error("Unknown category: '{0}'. Available: creative, technical, analysis, instruction, research")]
    UnknownCategory(String),

    /// A template slot has no value in the supplied slot map
    #[error("Slot '{slot}' missing for category '{category}'")]
    MissingSlot { slot: String, category: String },

    /// A section required by the requested detail level was not supplied
    #[error("Section '{0}' missing for the requested detail level")]
    MissingSection(String),

    /// The prompt to optimize is empty after trimming whitespace
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Template catalog and rendering errors
    #[error("Template error: {0}")]
    Template(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_message_names_slot_and_category() {
        let err = AppError::MissingSlot {
            slot: "conceito".to_string(),
            category: "technical".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("conceito"));
        assert!(msg.contains("technical"));
    }

    #[test]
    fn test_unknown_category_message_lists_alternatives() {
        let err = AppError::UnknownCategory("poetry".to_string());
        let msg = err.to_string();
        assert!(msg.contains("poetry"));
        assert!(msg.contains("creative"));
    }
}
