//! # vieta-rings
//!
//! The algebraic traits generic polynomial code is written against.
//!
//! ```text
//! Ring
//!  └── EuclideanDomain
//!       └── Field
//! ```
//!
//! `Integer` is a Euclidean domain, `Rational` a field.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use traits::{EuclideanDomain, Field, Ring};
