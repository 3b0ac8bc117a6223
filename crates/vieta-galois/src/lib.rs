//! # vieta-galois
//!
//! Galois groups of irreducible monic integer polynomials of degree at
//! most five, labelled the way PARI's `polgalois` prints them.
//!
//! ```
//! use vieta_galois::{galois_group, GaloisGroup};
//! use vieta_poly::DensePoly;
//!
//! let f = DensePoly::from_i64s(&[-2, 0, 0, 1]); // x^3 - 2
//! assert_eq!(galois_group(&f), Ok(GaloisGroup::S3));
//! ```
//!
//! Degrees 3 and 4 are decided exactly from discriminants and the cubic
//! resolvent. Degree 5 reads Frobenius cycle types at
//! [`FROBENIUS_PRIMES`] unramified primes, so it is correct with
//! overwhelming probability rather than by proof.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod classify;
pub mod error;
pub mod frobenius;
pub mod group;

#[cfg(test)]
mod proptests;

pub use classify::{cubic_resolvent, galois_group};
pub use error::GaloisError;
pub use frobenius::{frobenius_sample, FrobeniusSample, FROBENIUS_PRIMES};
pub use group::{normalize_label, GaloisGroup};
