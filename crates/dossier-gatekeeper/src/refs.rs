//! Reference-field declarations per entity type
//!
//! Which fields of a record hold cross-references, and whether the schema
//! pins the target type. Fields without a declared target fall back to the
//! identifier prefix convention per value, then to a union search.

use dossier_domain::EntityType;
use serde_json::Value;

/// One reference-bearing field of an entity type.
#[derive(Debug, Clone, Copy)]
pub struct RefField {
    /// Field name in the record
    pub field: &'static str,

    /// Declared target type; `None` means infer per value
    pub target: Option<EntityType>,
}

const fn open(field: &'static str) -> RefField {
    RefField { field, target: None }
}

const fn pinned(field: &'static str, target: EntityType) -> RefField {
    RefField {
        field,
        target: Some(target),
    }
}

/// Reference fields carried by records of the given type.
///
/// `cross_refs` is the free-form reference list every type carries; the
/// remaining fields are pinned by the type's schema.
pub fn ref_fields(ty: EntityType) -> &'static [RefField] {
    const VARIABLE: &[RefField] = &[open("cross_refs")];
    const GAP: &[RefField] = &[open("cross_refs"), pinned("related_traps", EntityType::Trap)];
    const TRAP: &[RefField] = &[
        open("cross_refs"),
        pinned("observations", EntityType::Observation),
    ];
    const OBSERVATION: &[RefField] = &[open("cross_refs"), pinned("module", EntityType::Module)];
    const SCENARIO: &[RefField] = &[
        open("cross_refs"),
        pinned("variables", EntityType::Variable),
    ];
    const SESSION: &[RefField] = &[pinned("modules", EntityType::Module)];
    const MODULE: &[RefField] = &[pinned("sessions", EntityType::Session)];

    match ty {
        EntityType::Variable => VARIABLE,
        EntityType::Gap => GAP,
        EntityType::Trap => TRAP,
        EntityType::Observation => OBSERVATION,
        EntityType::Scenario => SCENARIO,
        EntityType::Session => SESSION,
        EntityType::Module => MODULE,
    }
}

/// Collect a field's reference values as strings.
///
/// Accepts a single scalar or a sequence; numbers are stringified so session
/// numbers resolve in the same identifier space as everything else.
pub fn ref_values(record: &Value, field: &str) -> Vec<String> {
    match record.get(field) {
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        Some(Value::Number(n)) => vec![n.to_string()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
