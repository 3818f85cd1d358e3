//! Error types for the generator core

use thiserror::Error;

use crate::model::BasicType;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Fatal generation errors.
///
/// Each variant carries enough context (schema element name, constraint
/// kind) to locate the offending schema fragment. Recoverable conditions are
/// reported through the `tracing` channel instead and never surface here.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Malformed {constraint} constraint on '{property}': '{value}' is not an integer")]
    MalformedConstraint {
        property: String,
        constraint: &'static str,
        value: String,
    },

    #[error("Unknown identifier kind '{kind}' on '{property}'")]
    UnknownIdentifierKind { property: String, kind: String },

    #[error("Data kind {kind} is not supported for numeric constraints")]
    UnsupportedKind { kind: BasicType },

    #[error("Challenge value '{value}' is not a valid {kind}")]
    UnparseableChallenge { value: String, kind: BasicType },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl GeneratorError {
    /// True for the coercion failures NumberValidator treats as fail-open
    pub fn is_unparseable_challenge(&self) -> bool {
        matches!(self, GeneratorError::UnparseableChallenge { .. })
    }
}
