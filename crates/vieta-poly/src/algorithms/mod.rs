//! Polynomial algorithms.
//!
//! This module contains:
//! - Univariate GCD over a field, content and primitive part
//! - Multivariate GCD over Q (recursive primitive PRS)
//! - Squarefree decomposition (Yun), univariate and multivariate
//! - Resultants and discriminants (Sylvester matrix, Bareiss)

pub mod factor;
pub mod gcd;
pub mod resultant;
pub mod squarefree;

pub use factor::{squarefree_factor, Factorization, PolyFactor};
pub use gcd::{content, gcd, poly_div_rem, poly_gcd, primitive_part};
pub use resultant::{discriminant, resultant};
pub use squarefree::{squarefree_decomposition, SquarefreeDecomposition, SquarefreeFactor};
