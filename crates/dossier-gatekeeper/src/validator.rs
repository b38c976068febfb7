//! Validation orchestration across entity types

use crate::config::ValidationConfig;
use crate::refs::{ref_fields, ref_values};
use crate::report::{IssueKind, TypeSummary, ValidationIssue, ValidationReport};
use crate::schema::CompiledSchema;
use dossier_domain::{EntityRef, EntityType};
use dossier_store::{record_id, Collection, StoreError};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The Gatekeeper validates the Entity Store before rendering.
///
/// All checks accumulate issues; nothing fails fast. A missing data or
/// schema file is fatal only for the affected type, never for the run.
pub struct Gatekeeper {
    data_dir: PathBuf,
    schema_dir: PathBuf,
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a Gatekeeper over a data and schema directory.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        data_dir: P,
        schema_dir: Q,
        config: ValidationConfig,
    ) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            schema_dir: schema_dir.as_ref().to_path_buf(),
            config,
        }
    }

    /// Validate the selected entity types and produce the full report.
    ///
    /// Structural checks (duplicates, schema conformance) run per selected
    /// type; cross-references resolve against the entire dataset but only
    /// issues whose source record belongs to a selected type are reported.
    pub fn run(&self, types: &[EntityType]) -> ValidationReport {
        let selected: Vec<EntityType> = EntityType::ALL
            .into_iter()
            .filter(|ty| types.contains(ty))
            .collect();

        let mut xref_issues = if self.config.check_cross_references {
            self.cross_reference_issues()
        } else {
            BTreeMap::new()
        };

        let mut report = ValidationReport::default();
        for ty in selected {
            let (entries_checked, mut issues) = self.structural_issues(ty);
            issues.extend(xref_issues.remove(&ty).unwrap_or_default());
            report.push_type(
                TypeSummary {
                    entity_type: ty,
                    entries_checked,
                    issues_found: issues.len(),
                },
                issues,
            );
        }
        report
    }

    /// Duplicate-identifier and schema-conformance checks for one type.
    fn structural_issues(&self, ty: EntityType) -> (usize, Vec<ValidationIssue>) {
        if !self.config.check_duplicates && !self.config.check_schemas {
            // Nothing structural to check; still report how many entries
            // the cross-reference pass covered for this type.
            let entries = Collection::load(&self.data_dir.join(ty.data_file()))
                .map(|c| c.entries().len())
                .unwrap_or(0);
            return (entries, Vec::new());
        }

        let data_path = self.data_dir.join(ty.data_file());
        let collection = match Collection::load(&data_path) {
            Ok(c) => c,
            Err(StoreError::NotFound(path)) => {
                return (
                    0,
                    vec![resource_issue(
                        ty,
                        format!("Data file not found: {}", path.display()),
                    )],
                );
            }
            Err(e) => {
                return (
                    0,
                    vec![resource_issue(
                        ty,
                        format!("Failed to load {}: {}", data_path.display(), e),
                    )],
                );
            }
        };
        let entries = collection.entries();
        debug!(entity_type = %ty, entries = entries.len(), "running structural checks");

        let mut issues = Vec::new();

        if self.config.check_duplicates {
            issues.extend(duplicate_issues(ty, entries));
        }

        if self.config.check_schemas {
            let schema_path = self.schema_dir.join(ty.schema_file());
            if !schema_path.exists() {
                issues.push(resource_issue(
                    ty,
                    format!("Schema file not found: {}", schema_path.display()),
                ));
                return (entries.len(), issues);
            }
            match CompiledSchema::load(&schema_path) {
                Ok(schema) => issues.extend(schema_issues(ty, entries, &schema)),
                Err(e) => issues.push(resource_issue(ty, e.to_string())),
            }
        }

        (entries.len(), issues)
    }

    /// Resolve every reference value in the dataset.
    ///
    /// Issues are grouped by the source record's entity type so the caller
    /// can merge them into per-type lists deterministically.
    fn cross_reference_issues(&self) -> BTreeMap<EntityType, Vec<ValidationIssue>> {
        // Load every collection, tolerating absent files: an absent type
        // contributes an empty identifier set, nothing more.
        let mut collections: BTreeMap<EntityType, Collection> = BTreeMap::new();
        for ty in EntityType::ALL {
            let collection = Collection::load(&self.data_dir.join(ty.data_file()))
                .unwrap_or_default();
            collections.insert(ty, collection);
        }

        // Per-type identifier index plus the union fallback.
        let mut index: BTreeMap<EntityType, HashSet<String>> = BTreeMap::new();
        let mut union: HashSet<String> = HashSet::new();
        for (ty, collection) in &collections {
            let ids: HashSet<String> = collection
                .entries()
                .iter()
                .filter_map(|r| record_id(r, *ty))
                .collect();
            union.extend(ids.iter().cloned());
            index.insert(*ty, ids);
        }

        let mut issues: BTreeMap<EntityType, Vec<ValidationIssue>> = BTreeMap::new();
        for (ty, collection) in &collections {
            for (i, record) in collection.entries().iter().enumerate() {
                let rid = record_id(record, *ty).unwrap_or_else(|| format!("index-{}", i));
                for rf in ref_fields(*ty) {
                    for value in ref_values(record, rf.field) {
                        if let Some(issue) =
                            resolve(*ty, &rid, rf.field, &value, rf.target, &index, &union)
                        {
                            issues.entry(*ty).or_default().push(issue);
                        }
                    }
                }
            }
        }
        issues
    }
}

fn resource_issue(ty: EntityType, message: String) -> ValidationIssue {
    ValidationIssue {
        entity_type: ty,
        record_id: String::new(),
        location: String::new(),
        message,
        kind: IssueKind::Resource,
    }
}

/// Flag the second and later occurrences of each identifier.
fn duplicate_issues(ty: EntityType, entries: &[Value]) -> Vec<ValidationIssue> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut issues = Vec::new();
    for record in entries {
        let id = record_id(record, ty).unwrap_or_else(|| "UNKNOWN".to_string());
        if !seen.insert(id.clone()) {
            issues.push(ValidationIssue {
                entity_type: ty,
                record_id: id.clone(),
                location: ty.id_field().to_string(),
                message: format!("Duplicate ID: {}", id),
                kind: IssueKind::DuplicateId,
            });
        }
    }
    issues
}

/// Check every record against the compiled schema, reporting all violations.
fn schema_issues(
    ty: EntityType,
    entries: &[Value],
    schema: &CompiledSchema,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (i, record) in entries.iter().enumerate() {
        let rid = record_id(record, ty).unwrap_or_else(|| format!("index-{}", i));
        for (location, message) in schema.check(record) {
            issues.push(ValidationIssue {
                entity_type: ty,
                record_id: rid.clone(),
                location,
                message,
                kind: IssueKind::Schema,
            });
        }
    }
    issues
}

/// Resolve one reference value; `None` means it resolved cleanly.
fn resolve(
    source: EntityType,
    rid: &str,
    field: &str,
    value: &str,
    declared: Option<EntityType>,
    index: &BTreeMap<EntityType, HashSet<String>>,
    union: &HashSet<String>,
) -> Option<ValidationIssue> {
    let reference = match declared {
        Some(t) => EntityRef::declared(value, t),
        None => EntityRef::infer(value),
    };
    let (resolved, message) = match reference.target {
        Some(t) => (
            index.get(&t).is_some_and(|ids| ids.contains(value)),
            format!("Unresolved reference '{}': no such {} identifier", value, t),
        ),
        None => (
            union.contains(value),
            format!("Unresolved reference '{}': no identifier of any type matches", value),
        ),
    };
    if resolved {
        None
    } else {
        Some(ValidationIssue {
            entity_type: source,
            record_id: rid.to_string(),
            location: field.to_string(),
            message,
            kind: IssueKind::UnresolvedRef,
        })
    }
}
