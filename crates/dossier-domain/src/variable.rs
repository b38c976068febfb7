//! Variable record module - the typed output of table extraction

use crate::table::TableKind;
use serde::{Deserialize, Serialize};

/// One extracted variable, fully typed.
///
/// This is the shape the extractor emits and the store serializes. Field
/// order matches the durable YAML layout so regenerated files diff cleanly
/// against hand-maintained ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Unique identifier (`SV-01`, `FV-03`, ... or verbatim `NQ` code)
    pub id: String,

    /// Plain variable name, version annotation and markup stripped
    pub name: String,

    /// Source table kind (serialized as its snake-case name)
    pub table: String,

    /// Current value cell, normalized
    pub current_value: String,

    /// Trend cell, normalized
    pub trend: String,

    /// Insight/description cell, normalized
    pub insight: String,

    /// Confidence tag with surrounding brackets stripped (e.g. `Med`)
    pub confidence: String,

    /// Version in which the variable was added (`v1.0` when unannotated)
    pub version_added: String,

    /// Session that introduced the variable, when known
    pub session_added: Option<u32>,

    /// Cross-references to other entities (empty at extraction time)
    pub cross_refs: Vec<String>,

    /// Epistemic sourcing tag
    pub epistemic_tag: String,

    /// Normalization-quality sub-type (NQ table only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nq_type: Option<String>,

    /// Normalization-quality threshold (NQ table only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nq_threshold: Option<String>,
}

impl VariableRecord {
    /// Create a record for a counter-identified table row.
    pub fn new(id: String, name: String, table: TableKind) -> Self {
        Self {
            id,
            name,
            table: table.as_str().to_string(),
            current_value: String::new(),
            trend: String::new(),
            insight: String::new(),
            confidence: String::new(),
            version_added: "v1.0".to_string(),
            session_added: None,
            cross_refs: Vec::new(),
            epistemic_tag: "Mixed".to_string(),
            nq_type: None,
            nq_threshold: None,
        }
    }

    /// The table kind this record was extracted from.
    pub fn table_kind(&self) -> Option<TableKind> {
        TableKind::parse(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let r = VariableRecord::new("SV-01".into(), "Regime cohesion".into(), TableKind::Stock);
        assert_eq!(r.table, "stock");
        assert_eq!(r.version_added, "v1.0");
        assert_eq!(r.epistemic_tag, "Mixed");
        assert!(r.cross_refs.is_empty());
        assert_eq!(r.table_kind(), Some(TableKind::Stock));
    }

    #[test]
    fn test_nq_fields_skipped_when_absent() {
        let r = VariableRecord::new("SV-01".into(), "X".into(), TableKind::Stock);
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("nq_type"));
        assert!(!json.contains("nq_threshold"));
    }
}
