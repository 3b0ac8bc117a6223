//! Classification errors.

use thiserror::Error;

/// Errors that can occur while computing a Galois group.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GaloisError {
    /// Degree zero or above five.
    #[error("unsupported degree {0}: only degrees 1 through 5 are classified")]
    UnsupportedDegree(usize),

    /// The Galois group of a reducible polynomial is not transitive.
    #[error("polynomial is reducible over Q")]
    Reducible,

    /// Leading coefficient other than 1.
    #[error("polynomial is not monic")]
    NotMonic,
}
