//! # vieta-integers
//!
//! Exact arithmetic for the vieta workspace.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - Prime fields with a runtime modulus (`PrimeField`)
//!
//! Small integers stay inline in `dashu`'s representation, so the
//! coefficient boxes of a census (|a| ≤ a few dozen) never allocate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{is_prime, primes_from, PrimeField};
pub use rational::Rational;
