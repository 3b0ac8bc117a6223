//! Re-classification of existing bucket directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use vieta_poly::parse_univariate;

use crate::error::CensusError;
use crate::outcome::{classify_polynomial, Outcome};
use crate::sink::{bucket_files, bucket_label};

/// A line whose fresh classification disagrees with its bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// The bucket file.
    pub path: PathBuf,
    /// One-based line number.
    pub line: usize,
    /// The polynomial as written.
    pub polynomial: String,
    /// The bucket the file claims.
    pub expected: String,
    /// What re-classification found: a bucket label, `reducible`, or a
    /// failure reason.
    pub found: String,
}

/// Result of [`verify_buckets`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Lines re-classified.
    pub checked: usize,
    /// Lines skipped as unparseable or not monic.
    pub skipped: usize,
    /// Disagreements.
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// True when every checked line matched its bucket.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Re-classifies every line of every bucket file in `dir`.
///
/// # Errors
///
/// Returns [`CensusError::Io`] if the directory or a file cannot be read.
pub fn verify_buckets(dir: &Path) -> Result<VerifyReport, CensusError> {
    let mut report = VerifyReport::default();
    for path in bucket_files(dir)? {
        let expected = bucket_label(&path);
        let text = fs::read_to_string(&path)?;
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let f = match parse_univariate(line) {
                Ok(f) if f.is_monic() => f,
                Ok(_) => {
                    warn!(path = %path.display(), line = i + 1, "not monic, skipping");
                    report.skipped += 1;
                    continue;
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        line = i + 1,
                        error = %e,
                        "unparseable, skipping"
                    );
                    report.skipped += 1;
                    continue;
                }
            };
            report.checked += 1;
            let found = match classify_polynomial(&f) {
                Outcome::Classified(c) => c.bucket().to_owned(),
                Outcome::Reducible => "reducible".to_owned(),
                Outcome::Failed { reason } => reason,
            };
            if found != expected {
                report.mismatches.push(Mismatch {
                    path: path.clone(),
                    line: i + 1,
                    polynomial: line.to_owned(),
                    expected: expected.clone(),
                    found,
                });
            }
        }
    }
    info!(
        checked = report.checked,
        skipped = report.skipped,
        mismatches = report.mismatches.len(),
        "verified buckets"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_mislabelled_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("S3.txt"), "x^3 - 2\nx^3 - 3*x - 1\n").unwrap();
        fs::write(dir.path().join("A3.txt"), "x^3 - 3*x - 1\n\nx^3 + y\n").unwrap();
        fs::write(dir.path().join("S2.txt"), "x^2 - 1\n2*x^2 + 1\n").unwrap();

        let report = verify_buckets(dir.path()).unwrap();
        assert_eq!(report.checked, 4);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.mismatches.len(), 2);

        let s3 = report.mismatches.iter().find(|m| m.expected == "S3").unwrap();
        assert_eq!((s3.line, s3.found.as_str()), (2, "A3"));
        let s2 = report.mismatches.iter().find(|m| m.expected == "S2").unwrap();
        assert_eq!(s2.found, "reducible");
    }

    #[test]
    fn test_census_output_verifies() {
        use crate::{Census, CensusConfig, FileBuckets};

        let dir = tempfile::tempdir().unwrap();
        let sink = FileBuckets::create(dir.path()).unwrap();
        Census::new(CensusConfig::new(2, 3)).unwrap().run_serial(&sink).unwrap();
        let report = verify_buckets(dir.path()).unwrap();
        assert!(report.is_clean());
        assert!(report.checked > 0);
    }
}
