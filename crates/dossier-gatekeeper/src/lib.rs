//! Dossier Gatekeeper
//!
//! The Schema & Cross-Reference Validator: the gate between the Entity Store
//! and the report renderer.
//!
//! The Gatekeeper provides:
//! - Duplicate identifier detection per entity type
//! - JSON Schema conformance checking (all violations, never fail-fast)
//! - Cross-reference resolution against per-type identifier indexes
//! - An aggregated report with per-type summaries and a pass/fail verdict
//!
//! # Examples
//!
//! ```no_run
//! use dossier_gatekeeper::{Gatekeeper, ValidationConfig};
//! use dossier_domain::EntityType;
//!
//! let gatekeeper = Gatekeeper::new("data", "schemas", ValidationConfig::default());
//! let report = gatekeeper.run(&EntityType::ALL);
//!
//! for issue in report.issues() {
//!     eprintln!("{}", issue);
//! }
//! assert!(report.passed());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod refs;
mod report;
mod schema;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use refs::{ref_fields, RefField};
pub use report::{IssueKind, TypeSummary, ValidationIssue, ValidationReport};
pub use validator::Gatekeeper;
