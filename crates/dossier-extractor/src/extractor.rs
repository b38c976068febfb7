//! Document scanning and row-to-record dispatch

use crate::error::ExtractorError;
use crate::normalize::{clean_text, strip_emphasis};
use crate::parser;
use crate::types::{ExtractionMetadata, ExtractionResult, SectionCounters};
use dossier_domain::{TableKind, VariableRecord};
use dossier_store::{Collection, Metadata};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

static VERSION_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(v(\d+\.\d+)\)").unwrap());
static BOLD_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\(v\d+\.\d+\)\*\*\s*").unwrap());
static PLAIN_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(v\d+\.\d+\)\s*").unwrap());

/// Footnote lines that open the trailing monitoring-note block.
const NOTE_MARKERS: &[&str] = &["*Variables require", "*v1."];

/// Header label of the name column; rows repeating it are layout noise.
const NAME_COLUMN_LABEL: &str = "Variable";

/// Header label of the code column in normalization-quality tables.
const CODE_COLUMN_LABEL: &str = "Code";

/// The Table-to-Record Extractor.
///
/// Stateless; per-run state (counters, current table) lives on the stack of
/// [`Extractor::extract`], so concurrent runs never interfere.
#[derive(Debug, Default)]
pub struct Extractor;

impl Extractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract records and monitoring notes from raw document text.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let lines: Vec<&str> = text.lines().collect();
        let mut result = ExtractionResult::default();
        let mut counters = SectionCounters::new();
        let mut current: Option<TableKind> = None;

        for (i, line) in lines.iter().enumerate() {
            let stripped = line.trim();

            if let Some(kind) = TableKind::match_heading(stripped) {
                current = Some(kind);
            }

            if let Some(kind) = current {
                if parser::is_header_row(stripped) {
                    let rows = parser::parse_table_rows(&lines, i);
                    debug!(table = %kind, rows = rows.len(), "parsing table block");
                    for row in &rows {
                        self.process_row(kind, row, &mut counters, &mut result);
                    }
                    // Reset so a later unrelated pipe block is not
                    // misattributed to this table.
                    current = None;
                }
            }
        }

        result.monitoring_notes = extract_monitoring_notes(&lines);
        result
    }

    /// Read a source document and extract from it.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult, ExtractorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExtractorError::SourceNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Ok(self.extract(&text))
    }

    fn process_row(
        &self,
        kind: TableKind,
        cells: &[String],
        counters: &mut SectionCounters,
        result: &mut ExtractionResult,
    ) {
        if cells.len() < 5 {
            warn!(table = %kind, cells = cells.len(), "skipping malformed row");
            result.skipped_rows += 1;
            return;
        }

        let record = match kind {
            TableKind::NormalizationQuality => match self.normalization_quality_row(cells) {
                Some(r) => r,
                None => return,
            },
            _ => match self.counted_row(kind, cells, counters) {
                Some(r) => r,
                None => return,
            },
        };

        *result.counts.entry(kind).or_insert(0) += 1;
        result.records.push(record);
    }

    /// Rows whose identifier is pre-assigned in the source (NQ codes).
    fn normalization_quality_row(&self, cells: &[String]) -> Option<VariableRecord> {
        let code = clean_text(&cells[0]);
        if code.is_empty() || code == CODE_COLUMN_LABEL {
            return None;
        }
        let mut record = VariableRecord::new(
            code,
            clean_text(&cells[1]),
            TableKind::NormalizationQuality,
        );
        record.insight = strip_emphasis(&clean_text(&cells[3]));
        // This table carries no per-row versioning; fixed metadata applies.
        record.confidence = "Med".to_string();
        record.version_added = "v1.4".to_string();
        record.session_added = Some(12);
        record.nq_type = Some(clean_text(&cells[2]));
        record.nq_threshold = Some(clean_text(&cells[4]));
        Some(record)
    }

    /// Rows identified by a per-table counter (`SV-01`, `FV-03`, ...).
    fn counted_row(
        &self,
        kind: TableKind,
        cells: &[String],
        counters: &mut SectionCounters,
    ) -> Option<VariableRecord> {
        let (name, version) = extract_name_and_version(&cells[0]);
        let name = clean_text(&name);
        if name.is_empty() || name == NAME_COLUMN_LABEL {
            return None;
        }

        let id = kind.record_id(counters.next(kind));
        let mut record = VariableRecord::new(id, name, kind);
        record.current_value = clean_text(&cells[1]);
        record.trend = clean_text(&cells[2]);
        record.insight = strip_emphasis(&clean_text(&cells[3]));
        record.confidence = clean_text(&cells[4])
            .trim_matches(|c| c == '[' || c == ']')
            .to_string();
        record.version_added = version;
        Some(record)
    }

    /// Convert a result into the store's collection shape and write it.
    pub fn write_store(
        &self,
        result: &ExtractionResult,
        metadata: &ExtractionMetadata,
        path: &Path,
    ) -> Result<(), ExtractorError> {
        let mut meta = Metadata::new();
        meta.insert("version".to_string(), Value::String(metadata.version.clone()));
        meta.insert("date".to_string(), Value::String(metadata.date.clone()));
        meta.insert("source".to_string(), Value::String(metadata.source.clone()));
        if !result.monitoring_notes.is_empty() {
            meta.insert(
                "monitoring_notes".to_string(),
                Value::Array(
                    result
                        .monitoring_notes
                        .iter()
                        .map(|n| Value::String(n.clone()))
                        .collect(),
                ),
            );
        }

        let entries = result
            .records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Collection::new(entries, meta).save(path)?;
        Ok(())
    }
}

/// Split the name column into plain name and version tag.
///
/// The column may carry `**(v1.3)** **Name**`, `(v1.3) Name`, or just
/// `**Name**`; an absent annotation defaults to `v1.0`.
fn extract_name_and_version(raw: &str) -> (String, String) {
    let raw = raw.trim();
    let version = VERSION_TAG
        .captures(raw)
        .map(|c| format!("v{}", &c[1]))
        .unwrap_or_else(|| "v1.0".to_string());

    let name = BOLD_VERSION.replace_all(raw, "");
    let name = PLAIN_VERSION.replace_all(&name, "");
    let name = name.replace("**", "");
    (name.trim().to_string(), version)
}

/// Collect the trailing footnote block as ordered monitoring notes.
///
/// The block opens at the first line starting with a prose-note marker;
/// from there every `*`-prefixed line is stripped of asterisks, normalized,
/// and kept in order.
fn extract_monitoring_notes(lines: &[&str]) -> Vec<String> {
    let mut notes = Vec::new();
    let mut in_notes = false;
    for line in lines {
        let stripped = line.trim();
        if NOTE_MARKERS.iter().any(|m| stripped.starts_with(m)) {
            in_notes = true;
        }
        if in_notes && stripped.starts_with('*') {
            let note = clean_text(stripped.trim_matches('*'));
            if !note.is_empty() {
                notes.push(note);
            }
        }
    }
    notes
}
