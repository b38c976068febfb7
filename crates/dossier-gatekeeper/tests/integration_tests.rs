//! End-to-end validation runs over fixture directories.

use dossier_domain::EntityType;
use dossier_gatekeeper::{Gatekeeper, IssueKind, ValidationConfig};
use tempfile::TempDir;

struct Fixture {
    data: TempDir,
    schemas: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            data: TempDir::new().unwrap(),
            schemas: TempDir::new().unwrap(),
        };
        // Permissive object schemas for every type; tests tighten specific
        // ones by overwriting.
        for ty in EntityType::ALL {
            fixture.schema(ty, r#"{"type": "object"}"#);
        }
        fixture
    }

    fn data_file(&self, ty: EntityType, contents: &str) {
        std::fs::write(self.data.path().join(ty.data_file()), contents).unwrap();
    }

    fn schema(&self, ty: EntityType, contents: &str) {
        std::fs::write(self.schemas.path().join(ty.schema_file()), contents).unwrap();
    }

    fn gatekeeper(&self, config: ValidationConfig) -> Gatekeeper {
        Gatekeeper::new(self.data.path(), self.schemas.path(), config)
    }
}

#[test]
fn test_clean_dataset_passes() {
    let fixture = Fixture::new();
    fixture.data_file(
        EntityType::Variable,
        "version: '1.7'\nentries:\n- id: SV-01\n  name: Regime cohesion\n",
    );
    fixture.data_file(EntityType::Trap, "- id: T-01\n  name: Mirror imaging\n");

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Variable, EntityType::Trap]);

    assert!(report.passed());
    assert_eq!(report.total_entries(), 2);
    assert_eq!(report.total_issues(), 0);
}

#[test]
fn test_unresolved_reference_named_in_issue() {
    let fixture = Fixture::new();
    // SV-99 does not exist; SV-01 does.
    fixture.data_file(
        EntityType::Variable,
        "- id: SV-01\n  cross_refs:\n  - SV-99\n",
    );

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Variable]);

    assert!(!report.passed());
    let issues: Vec<_> = report
        .issues()
        .iter()
        .filter(|i| i.kind == IssueKind::UnresolvedRef)
        .collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].record_id, "SV-01");
    assert_eq!(issues[0].location, "cross_refs");
    assert!(issues[0].message.contains("SV-99"));
}

#[test]
fn test_resolved_references_raise_nothing() {
    let fixture = Fixture::new();
    fixture.data_file(
        EntityType::Variable,
        "- id: SV-01\n  cross_refs:\n  - T-01\n- id: SV-02\n  cross_refs:\n  - SV-01\n",
    );
    fixture.data_file(EntityType::Trap, "- id: T-01\n");

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Variable, EntityType::Trap]);
    assert!(report.passed());
}

#[test]
fn test_missing_data_file_confines_failure() {
    let fixture = Fixture::new();
    fixture.data_file(EntityType::Variable, "- id: SV-01\n");
    // gaps.yaml never written

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Variable, EntityType::Gap]);

    let gap_issues: Vec<_> = report.issues_for(EntityType::Gap).collect();
    assert_eq!(gap_issues.len(), 1);
    assert_eq!(gap_issues[0].kind, IssueKind::Resource);
    assert!(gap_issues[0].message.contains("Data file not found"));

    // The variables type is unaffected.
    assert_eq!(report.issues_for(EntityType::Variable).count(), 0);
}

#[test]
fn test_every_violation_on_a_record_is_reported() {
    let fixture = Fixture::new();
    fixture.schema(
        EntityType::Trap,
        r#"{
            "type": "object",
            "required": ["id", "name", "severity"],
            "properties": {
                "id": {"type": "string"},
                "name": {"type": "string"},
                "severity": {"enum": ["High", "Med", "Low"]}
            }
        }"#,
    );
    // Missing name AND bad severity on the same record.
    fixture.data_file(EntityType::Trap, "- id: T-01\n  severity: Extreme\n");

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Trap]);

    let schema_issues: Vec<_> = report
        .issues()
        .iter()
        .filter(|i| i.kind == IssueKind::Schema)
        .collect();
    assert_eq!(schema_issues.len(), 2);
    assert!(schema_issues.iter().all(|i| i.record_id == "T-01"));
}

#[test]
fn test_duplicate_ids_reported_after_first() {
    let fixture = Fixture::new();
    fixture.data_file(
        EntityType::Variable,
        "- id: SV-01\n- id: SV-01\n- id: SV-01\n",
    );

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Variable]);

    let dups: Vec<_> = report
        .issues()
        .iter()
        .filter(|i| i.kind == IssueKind::DuplicateId)
        .collect();
    assert_eq!(dups.len(), 2);
}

#[test]
fn test_xref_only_skips_structural_checks() {
    let fixture = Fixture::new();
    // Duplicate ids AND an unresolved reference.
    fixture.data_file(
        EntityType::Variable,
        "- id: SV-01\n  cross_refs:\n  - SV-99\n- id: SV-01\n",
    );

    let report = fixture
        .gatekeeper(ValidationConfig::xref_only())
        .run(&[EntityType::Variable]);

    assert!(report
        .issues()
        .iter()
        .all(|i| i.kind == IssueKind::UnresolvedRef));
    assert_eq!(report.total_issues(), 1);
}

#[test]
fn test_pinned_field_rejects_wrong_type() {
    let fixture = Fixture::new();
    // scenario.variables is pinned to variables; T-01 is a trap.
    fixture.data_file(EntityType::Trap, "- id: T-01\n");
    fixture.data_file(
        EntityType::Scenario,
        "- id: SC-01\n  variables:\n  - T-01\n",
    );

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Scenario]);

    let issues: Vec<_> = report.issues_for(EntityType::Scenario).collect();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].location, "variables");
    assert!(issues[0].message.contains("variables identifier"));
}

#[test]
fn test_session_module_numeric_references() {
    let fixture = Fixture::new();
    fixture.data_file(EntityType::Session, "- number: 12\n  modules:\n  - A12\n");
    fixture.data_file(EntityType::Module, "- code: A12\n  sessions:\n  - 12\n");

    let report = fixture
        .gatekeeper(ValidationConfig::default())
        .run(&[EntityType::Session, EntityType::Module]);
    assert!(report.passed(), "issues: {:?}", report.issues());
}
