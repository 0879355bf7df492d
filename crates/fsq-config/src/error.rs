//! Error types for fsq configuration.

use std::{io, path::PathBuf};

use fsq_query::QueryError;
use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// The default result limit is outside the range the API serves.
    #[error("invalid search limit {limit} in {path}: must be between 1 and {max}")]
    InvalidLimit {
        /// File that set the limit.
        path: PathBuf,
        /// The rejected value.
        limit: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// The default order is not a known sort order.
    #[error("invalid search order in {path}: {source}")]
    InvalidOrder {
        /// File that set the order.
        path: PathBuf,
        /// Underlying parse error.
        source: QueryError,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
