//! Context window extraction
//!
//! Renders the lines surrounding a match with 1-based line numbers.
//! Pure: windows near the start or end of a file are clamped, never an
//! error.
//!
//! @module scan/context

/// Render the window `[center - radius, center + radius]`, clamped to the
/// file, as numbered lines in ascending order.
///
/// `center` is a 0-based index into `lines`; the rendered prefixes are
/// 1-based.
pub fn extract(lines: &[String], center: usize, radius: usize) -> String {
    let start = center.saturating_sub(radius);
    let end = (center + radius + 1).min(lines.len());

    let mut block = String::new();
    for (i, line) in lines.iter().enumerate().take(end).skip(start) {
        block.push_str(&format!("{}: {}\n", i + 1, line));
    }
    block
}
