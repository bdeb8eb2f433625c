//! Error types.
//!
//! The game itself cannot fail on player input; these cover the edges:
//! parsing colors typed on the command line, option counts outside the
//! color space, configuration files, and the terminal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing a `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 hex digits after '#', got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit '{0}' (use 0-9 and lowercase a-f)")]
    InvalidHex(char),
}

/// Errors from building an option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("cannot build {0} distinct options (must be between 1 and 16777216)")]
    TooManyOptions(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================
