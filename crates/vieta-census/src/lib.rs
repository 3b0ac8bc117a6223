//! # vieta-census
//!
//! Galois group census over boxes of monic integer polynomials.
//!
//! A census walks every `x^n + a_{n-1} x^{n-1} + … + a_0` with
//! coefficients in `[-r, r]`, drops the reducible ones and files each
//! remaining polynomial under the normalised label of its Galois group:
//!
//! - [`CoefficientBox`]: lexicographic enumeration of the box
//! - [`classify_polynomial`]: irreducibility filter and Galois group
//! - [`BucketSink`]: where classified polynomials go ([`FileBuckets`],
//!   [`MemoryBuckets`])
//! - [`Census`]: serial and rayon-parallel runners with cancellation
//! - [`verify_buckets`]: re-classifies an existing bucket directory
//! - [`analyze_folder`]: cross-references buckets with the reduced
//!   resolvent terms
//!
//! ```
//! use vieta_census::{Census, CensusConfig, MemoryBuckets};
//!
//! let census = Census::new(CensusConfig::new(2, 3)).unwrap();
//! let sink = MemoryBuckets::new();
//! let report = census.run_serial(&sink).unwrap();
//! assert_eq!(report.examined, 125);
//! assert!(sink.snapshot()["S3"].contains(&"x^3 - 2".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyze;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod outcome;
pub mod runner;
pub mod sink;
pub mod verify;

#[cfg(test)]
mod proptests;

pub use analyze::{
    analyze_bucket, analyze_folder, cross_reference, AnalyzeOptions, AnalyzeReport, CrossReference,
    CsvWriter,
};
pub use config::{CensusConfig, MAX_CENSUS_DEGREE};
pub use enumerate::{monic_from_tuple, CoefficientBox};
pub use error::CensusError;
pub use outcome::{classify_polynomial, ClassifiedPolynomial, Outcome};
pub use runner::{CancelToken, Census, CensusReport};
pub use sink::{bucket_files, bucket_label, BucketSink, FileBuckets, MemoryBuckets};
pub use verify::{verify_buckets, Mismatch, VerifyReport};
