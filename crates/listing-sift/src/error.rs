//! Error types for the configuration edge of the engine.
//!
//! Evaluation itself never fails; these errors only come out of parsing
//! rule values and rule sets.

use thiserror::Error;

/// Errors that can occur when building or loading rule sets.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A rule token is not one of the accepted values.
    #[error("unknown {kind} value '{value}'")]
    InvalidRule { kind: &'static str, value: String },

    /// The serialized rule set could not be decoded.
    #[error("invalid rule set: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for rule set operations.
pub type Result<T> = std::result::Result<T, SiftError>;
