//! # Style Error Types
//!
//! Errors raised while loading style configuration. Rendering itself never
//! fails: bad variant input falls back to defaults instead.

use thiserror::Error;

/// Errors that can occur while configuring the style engine.
#[derive(Error, Debug)]
pub enum StyleError {
    /// The config file could not be read.
    #[error("failed to read style config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse style config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A size tier name outside the closed set.
    #[error("unknown size tier: {0}")]
    UnknownSizeTier(String),
}

/// Result type for style configuration.
pub type StyleResult<T> = Result<T, StyleError>;
