//! # Vieta
//!
//! Closed-form resolvent terms for the generic monic polynomial, and a
//! Galois group census of small integer polynomials to compare them with.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: big integers and rationals throughout
//! - **Symbolic Reduction**: resolvent formulas reduced modulo the generic
//!   monic polynomial, viewed in elementary-symmetric, Vieta and root form
//! - **Factorisation over Z**: Cantor–Zassenhaus, Hensel lifting and
//!   Zassenhaus recombination
//! - **Galois Groups**: PARI-style labels for irreducible polynomials up
//!   to degree five
//! - **Census**: parallel bucketing of coefficient boxes by Galois group
//!
//! ## Quick Start
//!
//! ```
//! use vieta::prelude::*;
//!
//! let terms = calc_vieta_sum(3, FormulaVariant::Canonical).unwrap();
//! let f = parse_univariate("x^3 - 2").unwrap();
//! let values = CoefficientAssignment::from_poly(&f)
//!     .evaluate_all(&terms.terms)
//!     .unwrap();
//! assert_eq!(values.len(), 3);
//! assert_eq!(galois_group(&f).unwrap().label(), "S3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use vieta_census as census;
pub use vieta_factor as factor;
pub use vieta_galois as galois;
pub use vieta_integers as integers;
pub use vieta_poly as poly;
pub use vieta_resolvent as resolvent;
pub use vieta_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vieta_census::{
        analyze_folder, verify_buckets, AnalyzeOptions, BucketSink, CancelToken, Census,
        CensusConfig, CensusReport, CoefficientBox, FileBuckets, MemoryBuckets, Outcome,
    };
    pub use vieta_factor::{factor, is_irreducible, IntegerFactorization};
    pub use vieta_galois::{galois_group, normalize_label, GaloisGroup};
    pub use vieta_integers::{Integer, Rational};
    pub use vieta_poly::{discriminant, parse_univariate, DensePoly, Poly, Symbol, Symbols};
    pub use vieta_resolvent::{
        calc_fixed, calc_rootis, calc_roots_of_unity, calc_vieta_sum, calc_vieta_sum_original,
        common_calc_intermediates, reduce, CoefficientAssignment, FormulaVariant, ReducedTerms,
    };
    pub use vieta_rings::{EuclideanDomain, Field, Ring};
}
