//! Error types for the census.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vieta_poly::ParseError;
use vieta_resolvent::ResolventError;

/// Errors from configuring, running or analysing a census.
#[derive(Debug, Error)]
pub enum CensusError {
    /// Reading or writing a bucket file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A bucket line is not a polynomial.
    #[error("{path}:{line}: {source}")]
    Parse {
        /// The bucket file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The parser's complaint.
        source: ParseError,
    },

    /// Deriving the reduced terms failed.
    #[error(transparent)]
    Resolvent(#[from] ResolventError),

    /// The configuration file is not valid TOML for [`crate::CensusConfig`].
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A cross-reference record could not be serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration is well-formed but unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}
