//! Pipe-delimited table block parsing

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator rows look like `| :--- | ---: |` in any alignment flavor.
static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|\s*:?-+").unwrap());

/// Recognized header-cell names that open a table block.
const HEADER_CELLS: &[&str] = &["| Variable", "| Code"];

/// Whether a line is a table header row for a recognized column layout.
pub fn is_header_row(line: &str) -> bool {
    let trimmed = line.trim();
    HEADER_CELLS.iter().any(|h| trimmed.starts_with(h))
}

/// Parse the pipe-delimited block starting at `start` (the header row).
///
/// Skips the header row and a following dashes-only separator row, then
/// reads consecutive `|`-prefixed lines as data rows until a non-`|` line or
/// end of input. Each row is split on `|`, cells trimmed, and the empty
/// bounding cells produced by the row's outer pipes discarded.
pub fn parse_table_rows(lines: &[&str], start: usize) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut i = start;

    // Advance to the first | row
    while i < lines.len() && !lines[i].trim().starts_with('|') {
        i += 1;
    }
    if i >= lines.len() {
        return rows;
    }

    // Skip header row
    i += 1;

    // Skip separator row
    if i < lines.len() && SEPARATOR_ROW.is_match(lines[i].trim()) {
        i += 1;
    }

    // Data rows
    while i < lines.len() {
        let line = lines[i].trim();
        if !line.starts_with('|') {
            break;
        }
        let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
        if cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
        i += 1;
    }

    rows
}
