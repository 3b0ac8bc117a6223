//! # vieta-resolvent
//!
//! Closed-form resolvent building blocks for the generic monic polynomial
//! of degree j.
//!
//! A symmetric formula in the roots is written as a polynomial in a
//! marker x0 over the elementary symmetric functions e_k, then reduced
//! modulo `x0^j - e1 x0^(j-1) + … ± e_j` until every power of x0 is
//! below j. The coefficients of the remainder, followed by its x0-free
//! residue, are the reduced terms.
//!
//! ```
//! use vieta_resolvent::{calc_fixed, FormulaVariant};
//!
//! let fixed = calc_fixed(3, FormulaVariant::Canonical).unwrap();
//! assert_eq!(fixed.terms[0].to_string(), "e1^2 - 3*e2");
//! ```
//!
//! The terms are then viewed under three dictionaries:
//! - Vieta coefficients: `e_k → (-1)^k coeff_k` ([`calc_vieta_sum`])
//! - explicit roots: `e_k → e_k(x0, …, x_{j-1})` ([`calc_rootis`])
//! - roots of unity: `x_k → ζ^k`, exactly in Q(ζ) ([`calc_roots_of_unity`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cyclotomic;
pub mod dictionaries;
pub mod error;
pub mod formula;
pub mod numeric;
pub mod partition;
pub mod reduce;
pub mod views;

#[cfg(test)]
mod proptests;

pub use cyclotomic::{
    cyclotomic_polynomial, evaluate_at_roots_of_unity, root_unity, CyclotomicValue,
};
pub use dictionaries::{coeff_to_roots, ele_dict, elementary_symmetric, vieta_dict};
pub use error::ResolventError;
pub use formula::FormulaVariant;
pub use numeric::{resolvent_polynomial, terms_gcd, zero_terms, CoefficientAssignment};
pub use partition::TermPartition;
pub use reduce::{reduce, reduce_expression, Reduction};
pub use views::{
    calc_fixed, calc_fixed_batch, calc_rootis, calc_roots_of_unity, calc_vieta_sum,
    calc_vieta_sum_intermediates, calc_vieta_sum_original, common_calc_intermediates,
    common_calc_original, rootis_expanded, ReducedTerms,
};
