//! # vieta-poly
//!
//! Polynomial arithmetic for the vieta workspace.
//!
//! This crate provides:
//! - Typed symbols (`Symbol`, `Symbols`) for e_k, Vieta coefficients,
//!   root variables and the reduction marker
//! - Sparse multivariate polynomials over Q (`Poly`) in canonical form
//! - Dense univariate polynomials (`DensePoly`)
//! - Multivariate GCD and squarefree factorisation
//! - Resultants and discriminants
//! - The `x^3 + 7*x^2 - 2` text form used by bucket files
//!
//! ## Monomial order
//!
//! Monomials are compared lexicographically with the marker most
//! significant, so the leading term of a `Poly` carries the highest power
//! of the marker and collecting by the marker never reorders terms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod monomial;
pub mod sparse;
pub mod symbol;
pub mod text;

#[cfg(test)]
mod proptests;

pub use algorithms::{discriminant, squarefree_factor, Factorization, PolyFactor};
pub use dense::DensePoly;
pub use monomial::Monomial;
pub use sparse::{Poly, Substitution};
pub use symbol::{Symbol, Symbols, COEFF_NAMES, MAX_SYMBOL_DEGREE, MAX_VIETA_DEGREE};
pub use text::{format_univariate, parse_univariate, ParseError};
