//! # vieta-factor
//!
//! Polynomial factorization for the vieta workspace.
//!
//! This crate provides:
//! - **Cantor-Zassenhaus**: distinct and equal degree factorization over F_p
//! - **Hensel lifting**: lifting a modular factorization to p^k
//! - **Zassenhaus**: factorization over Z by lifting and recombination
//! - **Frobenius cycle types**: factor degrees modulo unramified primes
//! - **Multivariate**: irreducible factorisation over Q by monic Hensel
//!   lifting from a univariate image
//!
//! # Parallelism
//!
//! [`factor_batch`] factors independent polynomials on the rayon pool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cantor_zassenhaus;
pub mod hensel;
pub mod modpoly;
pub mod multivariate;
pub mod squarefree;
pub mod univariate;

#[cfg(test)]
mod proptests;

pub use cantor_zassenhaus::{cantor_zassenhaus_factor, factor_degrees, CantorZassenhausResult};
pub use hensel::{hensel_lift, HenselLiftResult};
pub use modpoly::ModPoly;
pub use multivariate::{factor_multivariate, split_squarefree};
pub use squarefree::{squarefree_factorization, SquarefreeFactor, SquarefreeFactorization};
pub use univariate::{
    factor, factor_batch, is_irreducible, FactorStats, IntegerFactor, IntegerFactorization,
};
