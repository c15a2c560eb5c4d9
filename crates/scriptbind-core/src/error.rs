//! Error types for scanning, configuration, and generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for a generation run
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Per-class failure while extracting a script class from header text
///
/// These never abort a run; the coordinator records them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The declaration was found but no `{` follows it
    #[error("class {class} has no body")]
    MissingBody { class: String },

    /// The text ended before the class body's braces balanced
    #[error("class {class} has unbalanced braces")]
    UnbalancedBraces { class: String },
}

impl ScanError {
    /// Name of the class the error refers to
    pub fn class_name(&self) -> &str {
        match self {
            ScanError::MissingBody { class } | ScanError::UnbalancedBraces { class } => class,
        }
    }
}

/// Failure to load or validate a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Caller-visible failure of a generation run
///
/// Only the aggregate file is fatal; per-file and per-header problems are
/// reported as skip notices instead.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The aggregated registration file could not be written
    #[error("failed to write generated file {}: {source}", path.display())]
    AggregateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}
