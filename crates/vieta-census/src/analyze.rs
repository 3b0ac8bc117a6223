//! Cross-referencing census buckets with the reduced resolvent terms.
//!
//! Each bucket polynomial `x^n + b x^{n-1} + c x^{n-2} + …` is pushed
//! through the Vieta view of the reduced terms. The resulting rationals
//! are summarised (gcd, zero count) and read back as the coefficients of
//! a polynomial, whose factorisation is recorded next to the Galois
//! group of the bucket.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use vieta_factor::factor;
use vieta_integers::{Integer, Rational};
use vieta_poly::{discriminant, parse_univariate, DensePoly};
use vieta_resolvent::{
    calc_vieta_sum, calc_vieta_sum_original, resolvent_polynomial, terms_gcd, zero_terms,
    CoefficientAssignment, FormulaVariant, ReducedTerms,
};

use crate::error::CensusError;
use crate::sink::{bucket_files, bucket_label};

/// How to analyse a bucket directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Degree of the bucket polynomials; other degrees are skipped.
    pub degree: usize,
    /// Use the unreduced initial split instead of the reduced terms.
    pub original: bool,
    /// Also write a JSON-lines file.
    pub json: bool,
    /// Formula variant of the derivation.
    pub variant: FormulaVariant,
    /// Where to write; the bucket directory itself when unset.
    pub out_dir: Option<PathBuf>,
}

impl AnalyzeOptions {
    /// Defaults for `degree`: reduced terms, canonical formula, CSV only.
    #[must_use]
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            original: false,
            json: false,
            variant: FormulaVariant::Canonical,
            out_dir: None,
        }
    }

    fn terms(&self) -> Result<ReducedTerms, CensusError> {
        let terms = if self.original {
            calc_vieta_sum_original(self.degree, self.variant)?
        } else {
            calc_vieta_sum(self.degree, self.variant)?
        };
        Ok(terms)
    }
}

/// One polynomial cross-referenced with its term values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CrossReference {
    /// The bucket polynomial.
    pub polynomial: String,
    /// Term values, in term order.
    pub terms: Vec<String>,
    /// Gcd of the nonzero terms, or `undefined`.
    pub gcd: String,
    /// Number of zero terms.
    pub zero_terms: usize,
    /// Bucket label.
    pub galois_group: String,
    /// Discriminant of the bucket polynomial.
    pub discriminant: String,
    /// Factorisation over Q of the reconstructed polynomial.
    pub factors: String,
    /// `Σ term_i x^{k-1-i}`.
    pub polynomial_reconstructed: String,
}

/// Files written by [`analyze_folder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzeReport {
    /// Every file written, per-group CSVs first.
    pub written: Vec<PathBuf>,
    /// Records produced.
    pub records: usize,
    /// Lines skipped.
    pub skipped: usize,
}

/// Cross-references one polynomial against precomputed Vieta terms.
///
/// # Errors
///
/// Returns [`CensusError::Resolvent`] if a term keeps a symbol the
/// polynomial does not assign.
pub fn cross_reference(
    f: &DensePoly<Integer>,
    terms: &ReducedTerms,
    group: &str,
) -> Result<CrossReference, CensusError> {
    let values = CoefficientAssignment::from_poly(f).evaluate_all(&terms.terms)?;
    let reconstructed = resolvent_polynomial(&values);
    Ok(CrossReference {
        polynomial: f.to_string(),
        terms: values.iter().map(ToString::to_string).collect(),
        gcd: terms_gcd(&values).map_or_else(|| "undefined".to_owned(), |g| g.to_string()),
        zero_terms: zero_terms(&values),
        galois_group: group.to_owned(),
        discriminant: discriminant(f).to_string(),
        factors: factor_over_q(&reconstructed),
        polynomial_reconstructed: reconstructed.to_string(),
    })
}

/// Cross-references every usable line of one bucket file.
///
/// Each record is handed to `emit` as soon as it is computed. Returns the
/// number of records and of skipped lines.
///
/// # Errors
///
/// Returns [`CensusError::Io`] if the file cannot be read, or whatever
/// `emit` returns.
pub fn analyze_bucket<F>(
    path: &Path,
    degree: usize,
    terms: &ReducedTerms,
    mut emit: F,
) -> Result<(usize, usize), CensusError>
where
    F: FnMut(&CrossReference) -> Result<(), CensusError>,
{
    let group = bucket_label(path);
    let reader = BufReader::new(File::open(path)?);
    let mut records = 0;
    let mut skipped = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_univariate(line) {
            Ok(f) if f.is_monic() && f.degree() == degree => {
                emit(&cross_reference(&f, terms, &group)?)?;
                records += 1;
            }
            Ok(_) => {
                warn!(
                    path = %path.display(),
                    line = i + 1,
                    "not a monic degree-{degree} polynomial, skipping"
                );
                skipped += 1;
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    line = i + 1,
                    error = %e,
                    "unparseable, skipping"
                );
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}

/// Analyses every bucket of `folder`.
///
/// Writes `output_{group}_deg{degree}.csv` per bucket, a combined
/// `all_groups_deg{degree}.csv` and, if requested,
/// `all_groups_deg{degree}.jsonl`. Rows are written as they are produced.
///
/// # Errors
///
/// Fails on I/O errors and on degrees the Vieta view does not support.
pub fn analyze_folder(
    folder: &Path,
    options: &AnalyzeOptions,
) -> Result<AnalyzeReport, CensusError> {
    let terms = options.terms()?;
    let out_dir = options.out_dir.clone().unwrap_or_else(|| folder.to_path_buf());
    fs::create_dir_all(&out_dir)?;

    let degree = options.degree;
    let width = terms.len();
    let mut report = AnalyzeReport::default();

    let combined_path = out_dir.join(format!("all_groups_deg{degree}.csv"));
    let mut combined = CsvWriter::create(&combined_path, width)?;
    let json_path = out_dir.join(format!("all_groups_deg{degree}.jsonl"));
    let mut json = if options.json {
        Some(BufWriter::new(File::create(&json_path)?))
    } else {
        None
    };

    for path in bucket_files(folder)? {
        let out = out_dir.join(format!("output_{}_deg{degree}.csv", bucket_label(&path)));
        let mut group = CsvWriter::create(&out, width)?;
        let (records, skipped) = analyze_bucket(&path, degree, &terms, |r| {
            group.write(r)?;
            combined.write(r)?;
            if let Some(json) = json.as_mut() {
                serde_json::to_writer(&mut *json, r)?;
                writeln!(json)?;
            }
            Ok(())
        })?;
        group.finish()?;

        info!(bucket = %path.display(), records, "wrote {}", out.display());
        report.records += records;
        report.skipped += skipped;
        report.written.push(out);
    }

    combined.finish()?;
    report.written.push(combined_path);
    if let Some(mut json) = json {
        json.flush()?;
        report.written.push(json_path);
    }
    Ok(report)
}

/// Streams [`CrossReference`] rows as CSV with a fixed number of term
/// columns; shorter term lists are padded.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    out: W,
    width: usize,
}

impl CsvWriter<BufWriter<File>> {
    /// Creates `path` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Io`] if the file cannot be created.
    pub fn create(path: &Path, width: usize) -> Result<Self, CensusError> {
        Self::new(BufWriter::new(File::create(path)?), width)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wraps `out` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Io`] on write failure.
    pub fn new(mut out: W, width: usize) -> Result<Self, CensusError> {
        let mut header = vec!["polynomial".to_owned()];
        header.extend((0..width).map(|i| format!("term_{i}")));
        header.extend(
            [
                "gcd",
                "zero_terms",
                "galois_group",
                "discriminant",
                "factors",
                "polynomial_reconstructed",
            ]
            .map(str::to_owned),
        );
        writeln!(out, "{}", csv_row(&header))?;
        Ok(Self { out, width })
    }

    /// Writes one row.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Io`] on write failure.
    pub fn write(&mut self, r: &CrossReference) -> Result<(), CensusError> {
        let mut row = vec![r.polynomial.clone()];
        row.extend((0..self.width).map(|i| r.terms.get(i).cloned().unwrap_or_default()));
        row.extend([
            r.gcd.clone(),
            r.zero_terms.to_string(),
            r.galois_group.clone(),
            r.discriminant.clone(),
            r.factors.clone(),
            r.polynomial_reconstructed.clone(),
        ]);
        writeln!(self.out, "{}", csv_row(&row))?;
        Ok(())
    }

    /// Flushes and returns the inner writer.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Io`] if the flush fails.
    pub fn finish(mut self) -> Result<W, CensusError> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// `c · Π factor^m` over Q, with the rational content in front.
fn factor_over_q(p: &DensePoly<Rational>) -> String {
    if p.is_zero() {
        return "0".to_owned();
    }
    let primitive = p.to_primitive_integer();
    let content = p.leading_coeff() / &Rational::from(primitive.leading_coeff());
    if primitive.degree() == 0 {
        return content.to_string();
    }
    let factored = factor(&primitive).to_string();
    if content == Rational::from(1) {
        factored
    } else {
        format!("{content} * {factored}")
    }
}

fn csv_row(fields: &[String]) -> String {
    let mut row = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            row.push(',');
        }
        if field.contains([',', '"', '\n']) {
            let _ = write!(row, "\"{}\"", field.replace('"', "\"\""));
        } else {
            row.push_str(field);
        }
    }
    row
}
