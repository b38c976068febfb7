//! Dossier Extractor
//!
//! Converts loosely formatted source documents into typed variable records.
//!
//! # Overview
//!
//! Source documents are plain text with section-heading lines and
//! pipe-delimited Markdown tables. The extractor scans for recognized table
//! headings, parses the pipe rows beneath each one, repairs known encoding
//! corruption, recovers inline `(vX.Y)` version annotations, and assigns
//! stable per-table identifiers (`SV-01`, `FV-03`, ...). Trailing footnote
//! lines become ordered monitoring notes.
//!
//! # Architecture
//!
//! ```text
//! Text → Encoding Normalizer → Table Parser → VariableRecords → Entity Store
//! ```
//!
//! Extraction is a pure, reentrant transformation: per-table counters live in
//! an accumulator threaded through row processing, never in globals, so two
//! runs over identical input produce identical records.
//!
//! # Example Usage
//!
//! ```no_run
//! use dossier_extractor::Extractor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = Extractor::new().extract_file("APPENDIX_VARIABLES.md")?;
//!
//! println!("Extracted: {} records", result.records.len());
//! for (kind, count) in &result.counts {
//!     println!("  {}: {}", kind, count);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
pub mod normalize;
mod parser;
mod types;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use extractor::Extractor;
pub use types::{ExtractionMetadata, ExtractionResult, SectionCounters};
