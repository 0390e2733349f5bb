//! Per-file cast detection
//!
//! Reads one file at a time and records which explicit casts appear on
//! which lines, with a rendered context window per match. Matching is
//! line-oriented and textual: a cast inside a comment or string literal
//! is still reported.
//!
//! @module scan/detector

use crate::core::config::CONTEXT_RADIUS;
use crate::core::error::{Error, Result};
use crate::scan::context;
use crate::scan::kinds::CastKind;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One matched cast with its location and rendered context
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub kind: CastKind,
    /// The full source line the match was found on
    pub line: String,
    /// 1-based
    pub line_number: u32,
    /// Numbered window of surrounding lines
    pub context: String,
}

/// Every occurrence found in a single file, in scan order
/// (top to bottom, kinds checked in declared order per line)
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub occurrences: Vec<Occurrence>,
}

impl FileReport {
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Per-kind tallies for this file, keyed by keyword so iteration is
    /// alphabetical. Kinds with no occurrences are omitted.
    pub fn counts_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for occ in &self.occurrences {
            *counts.entry(occ.kind.keyword()).or_insert(0) += 1;
        }
        counts
    }
}

/// Scan a single file for explicit casts.
///
/// The file is read whole and split into lines; the handle is closed
/// before this returns. Per line, each kind is tested in declared order
/// and records at most one occurrence, so a line with two casts of the
/// same kind yields one entry while a line with two different kinds
/// yields two.
pub fn scan_file(path: &Path) -> Result<FileReport> {
    let content = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    let mut occurrences = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        for kind in CastKind::ALL {
            if kind.matches(line) {
                occurrences.push(Occurrence {
                    kind,
                    line: line.clone(),
                    line_number: (i + 1) as u32,
                    context: context::extract(&lines, i, CONTEXT_RADIUS),
                });
            }
        }
    }

    Ok(FileReport {
        path: path.display().to_string(),
        occurrences,
    })
}
