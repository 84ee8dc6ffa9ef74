//! Error types for the biorhythm_core library.

use chrono::NaiveDate;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for biorhythm_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Onboarding text did not match any accepted birth date format
    #[error("Unrecognized date: {0:?}")]
    NotRecognized(String),

    /// Target date precedes the birth date
    #[error("Target date {target} is before birth date {birth}")]
    InvalidRange { birth: NaiveDate, target: NaiveDate },

    /// Date query issued without its date argument
    #[error("Missing date argument")]
    MissingArgument,

    /// Date query argument is not a strict YYYY-MM-DD date
    #[error("Malformed date argument: {0:?}")]
    MalformedDate(String),

    /// Query needs a birth date but onboarding has not completed
    #[error("No birth date known")]
    NoBirthDateKnown,

    /// Outbound delivery failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
