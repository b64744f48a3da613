//! # Error Module
//!
//! Error types for the similarity kernel's edges.
//!
//! The kernel itself never fails: every byte strip and every 64-bit word is
//! valid input. Errors only arise where text or files are turned into that
//! input, and where a comparator is configured.
//!
//! ## Design Principles
//! - **Never panic** on user input - return errors instead
//! - **Include context** - the offending text, position or path

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read strip file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that occur while parsing textual input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid hash word '{input}': {reason}")]
    InvalidHashWord { input: String, reason: String },

    #[error("Invalid strip byte '{input}' at position {position} (expected 0-255 or two hex digits)")]
    InvalidStripByte { input: String, position: usize },

    #[error("Hex strip has an odd number of digits ({len})")]
    OddHexLength { len: usize },

    #[error("Input is empty")]
    EmptyInput,
}

/// Errors in comparator configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid threshold: {value} (must be 0-64)")]
    InvalidThreshold { value: u32 },

    #[error("Invalid minimum correlation: {value} (must be between 0 and 1)")]
    InvalidCorrelation { value: f32 },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, SimilarityError>;
