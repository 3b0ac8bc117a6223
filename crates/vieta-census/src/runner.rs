//! Serial and parallel census runners.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::{info, warn};

use vieta_integers::Integer;
use vieta_poly::DensePoly;

use crate::config::CensusConfig;
use crate::enumerate::CoefficientBox;
use crate::error::CensusError;
use crate::outcome::{classify_polynomial, Outcome};
use crate::sink::BucketSink;

/// Cooperative cancellation flag, checked between polynomials.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Summary of a census run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CensusReport {
    /// Polynomials taken from the box.
    pub examined: u64,
    /// Polynomials written to a bucket.
    pub classified: u64,
    /// Polynomials filtered as reducible.
    pub reducible: u64,
    /// Polynomials whose classification failed.
    pub failed: u64,
    /// Lines written per bucket.
    pub buckets: BTreeMap<String, u64>,
    /// Whether the run stopped early.
    pub cancelled: bool,
    /// Wall-clock time.
    pub elapsed: Duration,
}

impl CensusReport {
    fn merge(&mut self, other: &Self) {
        self.examined += other.examined;
        self.classified += other.classified;
        self.reducible += other.reducible;
        self.failed += other.failed;
        for (label, count) in &other.buckets {
            *self.buckets.entry(label.clone()).or_default() += count;
        }
    }
}

/// A configured census, ready to run against a sink.
pub struct Census<'a> {
    config: CensusConfig,
    cancel: CancelToken,
    progress: Option<&'a (dyn Fn(u64) + Sync)>,
}

impl<'a> Census<'a> {
    /// A census over the box described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Config`] if the configuration is invalid.
    pub fn new(config: CensusConfig) -> Result<Self, CensusError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: CancelToken::new(),
            progress: None,
        })
    }

    /// Uses `token` for cancellation.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Calls `callback` with the running count of examined polynomials.
    #[must_use]
    pub fn with_progress(mut self, callback: &'a (dyn Fn(u64) + Sync)) -> Self {
        self.progress = Some(callback);
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &CensusConfig {
        &self.config
    }

    /// The coefficient box the census walks.
    #[must_use]
    pub fn coefficient_box(&self) -> CoefficientBox {
        CoefficientBox::new(self.config.range, self.config.degree)
            .with_constant_one(self.config.constant_one)
    }

    /// Classifies every polynomial of the box on the calling thread.
    ///
    /// # Errors
    ///
    /// Propagates the first sink failure.
    pub fn run_serial(&self, sink: &dyn BucketSink) -> Result<CensusReport, CensusError> {
        let start = Instant::now();
        let mut report = CensusReport::default();
        for f in self.coefficient_box().polynomials() {
            if self.cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            report.merge(&process(&f, sink)?);
            if let Some(progress) = self.progress {
                progress(report.examined);
            }
        }
        report.elapsed = start.elapsed();
        self.summarise(&report);
        Ok(report)
    }

    /// Classifies the box on a pool of `config.workers` threads.
    ///
    /// Polynomials are handed out in enumeration order but complete in
    /// any order, so bucket lines may be interleaved differently from a
    /// serial run.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Config`] if the pool cannot be built and
    /// propagates the first sink failure.
    pub fn run_parallel(&self, sink: &dyn BucketSink) -> Result<CensusReport, CensusError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| format!("census-{i}"))
            .build()
            .map_err(|e| CensusError::Config(e.to_string()))?;

        let start = Instant::now();
        let totals = Mutex::new(CensusReport::default());
        let examined = AtomicU64::new(0);

        pool.install(|| {
            self.coefficient_box()
                .polynomials()
                .par_bridge()
                .try_for_each(|f| {
                    if self.cancel.is_cancelled() {
                        return Ok(());
                    }
                    let partial = process(&f, sink)?;
                    totals.lock().merge(&partial);
                    let count = examined.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(progress) = self.progress {
                        progress(count);
                    }
                    Ok::<(), CensusError>(())
                })
        })?;

        let mut report = totals.into_inner();
        report.cancelled = self.cancel.is_cancelled();
        report.elapsed = start.elapsed();
        self.summarise(&report);
        Ok(report)
    }

    fn summarise(&self, report: &CensusReport) {
        info!(
            degree = self.config.degree,
            range = self.config.range,
            examined = report.examined,
            classified = report.classified,
            reducible = report.reducible,
            failed = report.failed,
            cancelled = report.cancelled,
            elapsed_ms = report.elapsed.as_millis(),
            "census finished"
        );
    }
}

fn process(f: &DensePoly<Integer>, sink: &dyn BucketSink) -> Result<CensusReport, CensusError> {
    let mut report = CensusReport {
        examined: 1,
        ..CensusReport::default()
    };
    match classify_polynomial(f) {
        Outcome::Classified(c) => {
            sink.append(c.bucket(), &c.line())?;
            report.classified = 1;
            report.buckets.insert(c.bucket().to_owned(), 1);
        }
        Outcome::Reducible => report.reducible = 1,
        Outcome::Failed { reason } => {
            warn!(polynomial = %f, %reason, "classification failed, skipping");
            report.failed = 1;
        }
    }
    Ok(report)
}
