//! Destinations for classified polynomials.
//!
//! A bucket is named after a normalised group label and holds one
//! polynomial per line. Both sinks serialise appends behind a single
//! lock, so workers may share one sink by reference.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;
use vieta_galois::normalize_label;

use crate::error::CensusError;

/// File extension of bucket files.
pub const BUCKET_EXTENSION: &str = "txt";

/// Receives `(label, line)` pairs from census workers.
pub trait BucketSink: Send + Sync {
    /// Appends one line to the named bucket, creating it if needed.
    ///
    /// # Errors
    ///
    /// Implementations backed by storage report I/O failures.
    fn append(&self, label: &str, line: &str) -> Result<(), CensusError>;
}

/// Buckets as `{dir}/{label}.txt`, appended to in place.
#[derive(Debug)]
pub struct FileBuckets {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileBuckets {
    /// Creates `dir` (and parents) if missing.
    ///
    /// # Errors
    ///
    /// Returns [`CensusError::Io`] if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, CensusError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    /// The bucket directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `label`.
    #[must_use]
    pub fn bucket_path(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{label}.{BUCKET_EXTENSION}"))
    }
}

impl BucketSink for FileBuckets {
    fn append(&self, label: &str, line: &str) -> Result<(), CensusError> {
        let path = self.bucket_path(label);
        let _guard = self.lock.lock();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{line}")?;
        debug!(bucket = label, "appended {line}");
        Ok(())
    }
}

/// In-memory buckets, mainly for tests and benchmarks.
#[derive(Debug, Default)]
pub struct MemoryBuckets {
    buckets: Mutex<BTreeMap<String, Vec<String>>>,
}

impl MemoryBuckets {
    /// Empty buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Vec<String>> {
        self.buckets.lock().clone()
    }

    /// Every `(line, label)` pair, sorted.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self
            .buckets
            .lock()
            .iter()
            .flat_map(|(label, lines)| lines.iter().map(move |l| (l.clone(), label.clone())))
            .collect();
        pairs.sort();
        pairs
    }
}

impl BucketSink for MemoryBuckets {
    fn append(&self, label: &str, line: &str) -> Result<(), CensusError> {
        self.buckets
            .lock()
            .entry(label.to_owned())
            .or_default()
            .push(line.to_owned());
        Ok(())
    }
}

/// Lists the bucket files of a directory, sorted by name.
///
/// # Errors
///
/// Returns [`CensusError::Io`] if the directory cannot be read.
pub fn bucket_files(dir: &Path) -> Result<Vec<PathBuf>, CensusError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == BUCKET_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// The label a bucket file stands for: its file stem, cut at the first
/// `=` so that full labels such as `C(4) = 4` name the `C(4)` bucket.
#[must_use]
pub fn bucket_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| normalize_label(&s.to_string_lossy()).to_owned())
        .unwrap_or_default()
}
