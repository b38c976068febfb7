//! Dossier Render
//!
//! The report-rendering contract between the validated Entity Store and the
//! generated documents. The core exposes exactly one surface outward: a
//! [`ReportContext`] assembled from loaded collections plus the
//! field-equality filter and keyed sort helpers, consumed by [`Report`]
//! implementations that return rendered text per named report.
//!
//! The built-in renderers are deliberately thin; presentation quality is a
//! concern of the external document pipeline, not of this crate.

#![warn(missing_docs)]

mod context;
mod reports;

pub use context::ReportContext;
pub use reports::{builtin_reports, Report};

// Renderer helpers are part of the outward contract.
pub use dossier_store::{filter_by, sort_by};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during report rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// Requested report name is not registered
    #[error("Unknown report: {0}")]
    UnknownReport(String),

    /// Store error while writing output
    #[error("Store error: {0}")]
    Store(#[from] dossier_store::StoreError),
}

/// Render selected (or all) reports into the output directory.
///
/// Each output file is written atomically. Returns the written paths in
/// registry order.
pub fn build_reports(
    ctx: &ReportContext<'_>,
    output_dir: &Path,
    targets: Option<&[String]>,
) -> Result<Vec<PathBuf>, RenderError> {
    let reports = builtin_reports();

    if let Some(targets) = targets {
        for target in targets {
            if !reports.iter().any(|r| r.name() == target) {
                return Err(RenderError::UnknownReport(target.clone()));
            }
        }
    }

    let mut written = Vec::new();
    for report in &reports {
        if let Some(targets) = targets {
            if !targets.iter().any(|t| t == report.name()) {
                continue;
            }
        }
        let text = report.render(ctx)?;
        let path = output_dir.join(report.output_file());
        dossier_store::atomic_write(&path, &text)?;
        info!(report = report.name(), path = %path.display(), "wrote report");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_store::EntityStore;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_report_rejected() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let store = EntityStore::load(data.path()).unwrap();
        let ctx = ReportContext::new(&store, "2026-02-24".to_string());

        let err = build_reports(&ctx, out.path(), Some(&["nonsense".to_string()])).unwrap_err();
        assert!(matches!(err, RenderError::UnknownReport(_)));
    }

    #[test]
    fn test_build_all_reports() {
        let data = TempDir::new().unwrap();
        std::fs::write(
            data.path().join("variables.yaml"),
            "version: '1.7'\nentries:\n- id: SV-01\n  name: Regime cohesion\n  table: stock\n",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        let store = EntityStore::load(data.path()).unwrap();
        let ctx = ReportContext::new(&store, "2026-02-24".to_string());

        let written = build_reports(&ctx, out.path(), None).unwrap();
        assert_eq!(written.len(), builtin_reports().len());
        for path in written {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_build_selected_report() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let store = EntityStore::load(data.path()).unwrap();
        let ctx = ReportContext::new(&store, "2026-02-24".to_string());

        let written = build_reports(&ctx, out.path(), Some(&["index".to_string()])).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("00_MASTER_INDEX.md"));
    }
}
