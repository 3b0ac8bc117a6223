//! Census configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! range = 3
//! degree = 4
//! workers = 4
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CensusError;

/// Highest degree the Galois classification supports.
pub const MAX_CENSUS_DEGREE: usize = 5;

/// Parameters of one census run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CensusConfig {
    /// Half-width `n` of the coefficient box `[-n, n]`.
    pub range: u32,
    /// Degree of the enumerated polynomials.
    pub degree: usize,
    /// Worker threads for the parallel runner.
    pub workers: usize,
    /// Bucket directory; `galois_deg{degree}_range{range}` when unset.
    pub output_dir: Option<PathBuf>,
    /// Keep only polynomials with constant term 1.
    pub constant_one: bool,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            range: 5,
            degree: 3,
            workers: 8,
            output_dir: None,
            constant_one: false,
        }
    }
}

impl CensusConfig {
    /// Configuration for a box of half-width `range` in degree `degree`.
    #[must_use]
    pub fn new(range: u32, degree: usize) -> Self {
        Self {
            range,
            degree,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Toml`] for malformed input or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, CensusError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Io`] if the file cannot be read and
    /// [`CensusError::Toml`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, CensusError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// The bucket directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            PathBuf::from(format!("galois_deg{}_range{}", self.degree, self.range))
        })
    }

    /// Checks the degree and worker count.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), CensusError> {
        if self.degree == 0 || self.degree > MAX_CENSUS_DEGREE {
            return Err(CensusError::Config(format!(
                "degree must be between 1 and {MAX_CENSUS_DEGREE}, got {}",
                self.degree
            )));
        }
        if self.workers == 0 {
            return Err(CensusError::Config("workers must be positive".into()));
        }
        Ok(())
    }
}
