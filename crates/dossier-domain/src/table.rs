//! Table kind module - source-document table sections and identifier prefixes

use std::fmt;

/// A recognized table section in a source document.
///
/// The section heading determines which kind the rows beneath it become and
/// which identifier prefix generated records receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    /// Critical stock variables (slow-moving state)
    Stock,

    /// Critical flow variables (fast-moving state)
    Flow,

    /// Threshold variables (trip-wire conditions)
    Threshold,

    /// Positive optionality variables
    PositiveOptionality,

    /// Normalization quality variables (pre-coded ids in the source)
    NormalizationQuality,
}

/// Heading phrase → table kind, checked by substring containment.
///
/// Case-sensitive, first match wins per line. Order matters: the numbered
/// "TABLE n:" phrases come before their looser title fallbacks.
pub const HEADING_MARKERS: &[(&str, TableKind)] = &[
    ("TABLE 1:", TableKind::Stock),
    ("CRITICAL STOCK VARIABLES", TableKind::Stock),
    ("TABLE 2:", TableKind::Flow),
    ("CRITICAL FLOW VARIABLES", TableKind::Flow),
    ("TABLE 3:", TableKind::Threshold),
    ("THRESHOLD", TableKind::Threshold),
    ("TABLE 4:", TableKind::PositiveOptionality),
    ("POSITIVE OPTIONALITY", TableKind::PositiveOptionality),
    ("NORMALIZATION QUALITY VARIABLES", TableKind::NormalizationQuality),
];

impl TableKind {
    /// All table kinds, in source-document order.
    pub const ALL: [TableKind; 5] = [
        TableKind::Stock,
        TableKind::Flow,
        TableKind::Threshold,
        TableKind::PositiveOptionality,
        TableKind::NormalizationQuality,
    ];

    /// Snake-case name stored in each record's `table` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Stock => "stock",
            TableKind::Flow => "flow",
            TableKind::Threshold => "threshold",
            TableKind::PositiveOptionality => "positive_optionality",
            TableKind::NormalizationQuality => "normalization_quality",
        }
    }

    /// Parse a table kind from its snake-case name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stock" => Some(TableKind::Stock),
            "flow" => Some(TableKind::Flow),
            "threshold" => Some(TableKind::Threshold),
            "positive_optionality" => Some(TableKind::PositiveOptionality),
            "normalization_quality" => Some(TableKind::NormalizationQuality),
            _ => None,
        }
    }

    /// Two-letter identifier prefix for records generated from this table.
    pub fn prefix(&self) -> &'static str {
        match self {
            TableKind::Stock => "SV",
            TableKind::Flow => "FV",
            TableKind::Threshold => "TV",
            TableKind::PositiveOptionality => "PO",
            TableKind::NormalizationQuality => "NQ",
        }
    }

    /// Format a generated identifier: prefix plus zero-padded counter.
    pub fn record_id(&self, counter: u32) -> String {
        format!("{}-{:02}", self.prefix(), counter)
    }

    /// Match a document line against the heading marker table.
    ///
    /// Returns the kind of the first marker contained in the line, if any.
    pub fn match_heading(line: &str) -> Option<Self> {
        HEADING_MARKERS
            .iter()
            .find(|(marker, _)| line.contains(marker))
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
