//! Types for extraction requests and results

use dossier_domain::{TableKind, VariableRecord};
use std::collections::BTreeMap;

/// Per-table running counters, threaded through row processing.
///
/// An explicit accumulator rather than module state keeps extraction
/// reentrant; the counter only advances for accepted rows, so identifier
/// suffixes are dense within a table.
#[derive(Debug, Default)]
pub struct SectionCounters {
    counters: BTreeMap<TableKind, u32>,
}

impl SectionCounters {
    /// Create a fresh accumulator with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `kind` and return its new value (1-based).
    pub fn next(&mut self, kind: TableKind) -> u32 {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Current counter value for `kind`.
    pub fn current(&self, kind: TableKind) -> u32 {
        self.counters.get(&kind).copied().unwrap_or(0)
    }
}

/// The outcome of one extraction run.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    /// Extracted records, in input order
    pub records: Vec<VariableRecord>,

    /// Ordered monitoring notes from the document's trailing footnote block
    pub monitoring_notes: Vec<String>,

    /// Accepted-record count per table kind
    pub counts: BTreeMap<TableKind, usize>,

    /// Rows recognized but dropped as malformed (fewer than five cells)
    pub skipped_rows: usize,
}

/// Type-level metadata attached to the written collection.
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Dataset version tag (e.g. `1.7`)
    pub version: String,

    /// Extraction date (ISO-8601)
    pub date: String,

    /// Free-form provenance note
    pub source: String,
}
