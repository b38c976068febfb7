//! Validation issues, per-type summaries, and the aggregated report

use dossier_domain::EntityType;
use std::fmt;

/// Category of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Data or schema file absent or unloadable (fatal for its type only)
    Resource,

    /// Identifier appears more than once within a type's collection
    DuplicateId,

    /// Record violates its type's JSON Schema
    Schema,

    /// Reference value matches no identifier in any candidate type
    UnresolvedRef,
}

/// One validation issue, located as precisely as the check allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Entity type the issue belongs to
    pub entity_type: EntityType,

    /// Identifier of the offending record (`index-N` when the record has
    /// no identifier, empty for type-level resource issues)
    pub record_id: String,

    /// Dotted path of the offending field, `(root)` for whole-record issues
    pub location: String,

    /// Human-readable description
    pub message: String,

    /// Issue category
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.record_id.is_empty() {
            write!(f, "[{}] {}", self.entity_type, self.message)
        } else {
            write!(
                f,
                "[{}] {}: {}: {}",
                self.entity_type, self.record_id, self.location, self.message
            )
        }
    }
}

/// Entries checked and issues found for one entity type
#[derive(Debug, Clone, Copy)]
pub struct TypeSummary {
    /// The entity type
    pub entity_type: EntityType,

    /// Records examined (zero when the data file was absent)
    pub entries_checked: usize,

    /// Issues attributed to this type
    pub issues_found: usize,
}

/// The complete outcome of a validation run.
///
/// Issues are ordered by entity type (canonical order), then by input order
/// within the type, regardless of which pass produced them.
#[derive(Debug, Default)]
pub struct ValidationReport {
    summaries: Vec<TypeSummary>,
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Append one type's summary and its issues.
    pub(crate) fn push_type(&mut self, summary: TypeSummary, issues: Vec<ValidationIssue>) {
        self.summaries.push(summary);
        self.issues.extend(issues);
    }

    /// Per-type summaries, in check order.
    pub fn summaries(&self) -> &[TypeSummary] {
        &self.summaries
    }

    /// Every issue found, in stable order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Issues attributed to one entity type.
    pub fn issues_for(&self, ty: EntityType) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.entity_type == ty)
    }

    /// Total records examined across all types.
    pub fn total_entries(&self) -> usize {
        self.summaries.iter().map(|s| s.entries_checked).sum()
    }

    /// Total issues found.
    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// The verdict: pass if and only if the issue list is empty.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}
