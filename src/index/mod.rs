//! Path-keyed scan results
//!
//! Aggregates the non-empty file reports produced by the scan phase.
//! Built once, then read-only for the rest of the process. A `BTreeMap`
//! keeps iteration in lexicographic path order so summary and search
//! output is deterministic.
//!
//! @module index

use crate::scan::FileReport;
use std::collections::BTreeMap;

/// The complete in-memory collection of per-file reports
#[derive(Debug, Default)]
pub struct CastIndex {
    files: BTreeMap<String, FileReport>,
}

impl CastIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a report under its path. Empty reports are dropped, so the
    /// key set is exactly the files with at least one occurrence.
    pub fn insert(&mut self, report: FileReport) {
        if report.is_empty() {
            return;
        }
        self.files.insert(report.path.clone(), report);
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of indexed files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// `(path, report)` pairs in lexicographic path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileReport)> {
        self.files.iter().map(|(path, report)| (path.as_str(), report))
    }

    /// Paths in lexicographic order; the positions here are the 1-based
    /// ordinals the console shows for file selection
    pub fn paths(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn get(&self, path: &str) -> Option<&FileReport> {
        self.files.get(path)
    }
}
