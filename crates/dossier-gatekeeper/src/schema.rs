//! JSON Schema loading, compilation, and per-record conformance checking

use crate::GatekeeperError;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::path::Path;

/// A compiled entity-type schema.
#[derive(Debug)]
pub struct CompiledSchema {
    compiled: JSONSchema,
}

impl CompiledSchema {
    /// Load and compile a schema document from disk.
    pub fn load(path: &Path) -> Result<Self, GatekeeperError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GatekeeperError::Schema(format!("{}: {}", path.display(), e)))?;
        let doc: Value = serde_json::from_str(&text)
            .map_err(|e| GatekeeperError::Schema(format!("{}: {}", path.display(), e)))?;
        Self::compile(&doc)
    }

    /// Compile an in-memory schema document.
    pub fn compile(doc: &Value) -> Result<Self, GatekeeperError> {
        let compiled = JSONSchema::compile(doc)
            .map_err(|e| GatekeeperError::Schema(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Check one record, returning every violation as `(location, message)`.
    ///
    /// Locations use the original arrow-joined path notation; an empty
    /// instance path reports as `(root)`. The iteration never stops at the
    /// first violation.
    pub fn check(&self, record: &Value) -> Vec<(String, String)> {
        match self.compiled.validate(record) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| {
                    let location = format_instance_path(&err.instance_path.to_string());
                    (location, err.to_string())
                })
                .collect(),
        }
    }
}

/// Turn a JSON Pointer (`/cross_refs/0`) into the report's readable
/// `cross_refs -> 0` form.
fn format_instance_path(pointer: &str) -> String {
    let segments: Vec<&str> = pointer.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "(root)".to_string()
    } else {
        segments.join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variable_schema() -> Value {
        json!({
            "type": "object",
            "required": ["id", "name", "confidence"],
            "properties": {
                "id": {"type": "string"},
                "name": {"type": "string"},
                "confidence": {"enum": ["High", "Med", "Low"]},
                "cross_refs": {"type": "array", "items": {"type": "string"}}
            }
        })
    }

    #[test]
    fn test_conforming_record() {
        let schema = CompiledSchema::compile(&variable_schema()).unwrap();
        let record = json!({"id": "SV-01", "name": "x", "confidence": "High"});
        assert!(schema.check(&record).is_empty());
    }

    #[test]
    fn test_all_violations_reported() {
        let schema = CompiledSchema::compile(&variable_schema()).unwrap();
        // Missing `name` and disallowed enum value: both must surface.
        let record = json!({"id": "SV-01", "confidence": "Certain"});
        let violations = schema.check(&record);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_nested_location_formatting() {
        let schema = CompiledSchema::compile(&variable_schema()).unwrap();
        let record = json!({
            "id": "SV-01", "name": "x", "confidence": "High",
            "cross_refs": ["T-01", 7]
        });
        let violations = schema.check(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, "cross_refs -> 1");
    }

    #[test]
    fn test_root_location() {
        let schema = CompiledSchema::compile(&json!({"type": "object"})).unwrap();
        let violations = schema.check(&json!("not an object"));
        assert_eq!(violations[0].0, "(root)");
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let err = CompiledSchema::compile(&json!({"type": "not-a-type"})).unwrap_err();
        assert!(matches!(err, GatekeeperError::Schema(_)));
    }
}
