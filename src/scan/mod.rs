//! Scan phase
//!
//! Walks the tree, runs the detector on every candidate, and builds the
//! index the console queries. Failures are isolated per file and logged;
//! the phase itself never aborts the run.
//!
//! @module scan

pub mod context;
pub mod detector;
pub mod kinds;
pub mod walker;

pub use detector::{scan_file, FileReport, Occurrence};
pub use kinds::CastKind;
pub use walker::FileWalker;

use crate::index::CastIndex;
use std::path::Path;
use tracing::warn;

/// Scan a directory tree into a query-ready index.
///
/// Files that fail to open or read are logged and excluded; scanning
/// continues with the next candidate. Only files with at least one
/// occurrence end up in the index.
pub fn scan_tree(root: &Path) -> CastIndex {
    let mut index = CastIndex::new();
    for path in FileWalker::new(root).discover() {
        match scan_file(&path) {
            Ok(report) => index.insert(report),
            Err(err) => warn!("{err}"),
        }
    }
    index
}
