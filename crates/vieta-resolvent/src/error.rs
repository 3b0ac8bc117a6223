//! Derivation errors.

use thiserror::Error;

/// Errors that abort a derivation for one degree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolventError {
    /// The construction needs at least a quadratic.
    #[error("degree {0} is too small: the formula needs degree at least 2")]
    DegreeTooSmall(usize),

    /// The degree is past a symbol table: the Vieta coefficient names or
    /// the symbol index itself.
    #[error("degree {degree} is out of range (maximum {max})")]
    DegreeOutOfRange {
        /// Requested degree.
        degree: usize,
        /// Largest supported degree.
        max: usize,
    },

    /// A numeric substitution left a symbol without a value.
    #[error("no value for symbol {0}")]
    UnresolvedSymbol(String),
}
