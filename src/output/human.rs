//! Human-readable output formatting

use crate::index::CastIndex;
use crate::scan::{CastKind, FileReport};

/// Per-file totals and per-kind counts, files in lexicographic order
pub fn format_summary(index: &CastIndex) -> String {
    let mut output = String::new();
    output.push_str("\n=== Summary of Cast Usage ===\n");

    for (path, report) in index.iter() {
        output.push_str(&format!("\nFile: {path}\n"));
        output.push_str(&format!(
            "Total casts found: {}\n",
            report.occurrences.len()
        ));
        for (keyword, count) in report.counts_by_kind() {
            output.push_str(&format!("  {keyword}: {count}\n"));
        }
    }

    output
}

/// Every occurrence of one file in scan order, with kind, line number,
/// matched line, and context block
pub fn format_file_detail(report: &FileReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("\nDetailed analysis for: {}\n", report.path));

    for occ in &report.occurrences {
        output.push_str(&format!(
            "\n=== {} at line {} ===\n",
            occ.kind, occ.line_number
        ));
        output.push_str(&format!("Line: {}\n", occ.line.trim()));
        output.push_str(&format!("Context:\n{}\n", occ.context));
    }

    output
}

/// Every occurrence of one kind across the whole index, files in
/// lexicographic order, scan order within a file. Zero matches is a
/// header with no entries, not an error.
pub fn format_kind_search(index: &CastIndex, kind: CastKind) -> String {
    let mut output = String::new();
    output.push_str(&format!("\nOccurrences of {kind}:\n"));

    for (path, report) in index.iter() {
        for occ in report.occurrences.iter().filter(|occ| occ.kind == kind) {
            output.push_str(&format!("\nFile: {path}\n"));
            output.push_str(&format!("Line {}:\n", occ.line_number));
            output.push_str(&format!("{}\n", occ.context));
        }
    }

    output
}
