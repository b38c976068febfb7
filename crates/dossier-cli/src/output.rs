//! Output formatting for the CLI.

use colored::Colorize;
use dossier_extractor::ExtractionResult;
use dossier_gatekeeper::ValidationReport;
use std::fmt::Write;
use std::path::Path;

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a full validation report: per-type summary lines, the issue
    /// list, and the grand-total banner.
    pub fn format_validation_report(&self, report: &ValidationReport) -> String {
        let mut out = String::new();

        for summary in report.summaries() {
            let header = format!(
                "{} ({} entries)",
                summary.entity_type, summary.entries_checked
            );
            if summary.issues_found == 0 {
                let _ = writeln!(out, "{} {}: OK", self.green("\u{2705}"), header);
            } else {
                let _ = writeln!(
                    out,
                    "{} {}: {} error(s)",
                    self.red("\u{274c}"),
                    header,
                    summary.issues_found
                );
                for issue in report.issues_for(summary.entity_type) {
                    let _ = writeln!(out, "  {}", issue);
                }
            }
        }

        let _ = writeln!(out, "\n{}", "=".repeat(50));
        if report.passed() {
            let _ = writeln!(
                out,
                "{}",
                self.green(&format!(
                    "VALIDATION PASSED: {} entries across {} entity types",
                    report.total_entries(),
                    report.summaries().len()
                ))
            );
        } else {
            let _ = writeln!(
                out,
                "{}",
                self.red(&format!(
                    "VALIDATION FAILED: {} error(s) across {} entries",
                    report.total_issues(),
                    report.total_entries()
                ))
            );
        }
        out
    }

    /// Format a migration summary: total plus per-table counts.
    pub fn format_migration_summary(&self, result: &ExtractionResult, out_path: &Path) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Migrated {} records to {}",
            result.records.len(),
            out_path.display()
        );
        for (kind, count) in &result.counts {
            let _ = writeln!(out, "  {}: {}", kind, count);
        }
        if result.skipped_rows > 0 {
            let _ = writeln!(
                out,
                "{}",
                self.yellow(&format!("  skipped {} malformed row(s)", result.skipped_rows))
            );
        }
        if !result.monitoring_notes.is_empty() {
            let _ = writeln!(out, "  monitoring notes: {}", result.monitoring_notes.len());
        }
        out
    }

    /// Format the list of written report files.
    pub fn format_build_summary(&self, written: &[std::path::PathBuf]) -> String {
        let mut out = String::new();
        for path in written {
            let _ = writeln!(out, "{} {}", self.green("wrote"), path.display());
        }
        out
    }

    fn green(&self, s: &str) -> String {
        if self.color_enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    fn red(&self, s: &str) -> String {
        if self.color_enabled {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn yellow(&self, s: &str) -> String {
        if self.color_enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }
}
