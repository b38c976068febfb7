//! Built-in report renderers
//!
//! Thin markdown emitters over the report context. Each named report maps to
//! one output file; the registry order is the build order.

use crate::context::{field, ReportContext};
use crate::RenderError;
use dossier_domain::{EntityType, TableKind};
use dossier_store::{filter_by, sort_by};
use std::fmt::Write;

/// One named report: a rendering function plus its output file.
pub trait Report {
    /// Registry name used for CLI selection.
    fn name(&self) -> &'static str;

    /// File name written into the output directory.
    fn output_file(&self) -> &'static str;

    /// Render the report to markdown text.
    fn render(&self, ctx: &ReportContext<'_>) -> Result<String, RenderError>;
}

/// All registered reports, in build order.
pub fn builtin_reports() -> Vec<Box<dyn Report>> {
    vec![
        Box::new(VariablesReport),
        Box::new(GapsReport),
        Box::new(TrapsReport),
        Box::new(ScenariosReport),
        Box::new(MasterIndexReport),
    ]
}

struct VariablesReport;

impl Report for VariablesReport {
    fn name(&self) -> &'static str {
        "variables"
    }

    fn output_file(&self) -> &'static str {
        "APPENDIX_VARIABLES.md"
    }

    fn render(&self, ctx: &ReportContext<'_>) -> Result<String, RenderError> {
        let entries = ctx.entries(EntityType::Variable);
        let mut out = String::new();
        let _ = writeln!(out, "# APPENDIX: VARIABLES");
        let _ = writeln!(
            out,
            "\nVersion {} — built {}\n",
            ctx.meta_str(EntityType::Variable, "version"),
            ctx.build_date()
        );

        for kind in TableKind::ALL {
            let rows = filter_by(entries, "table", kind.as_str());
            if rows.is_empty() {
                continue;
            }
            let _ = writeln!(out, "## {}\n", kind);
            let _ = writeln!(out, "| ID | Variable | Current Value | Trend | Confidence |");
            let _ = writeln!(out, "| --- | --- | --- | --- | --- |");
            for row in rows {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {} | {} |",
                    field(row, "id"),
                    field(row, "name"),
                    field(row, "current_value"),
                    field(row, "trend"),
                    field(row, "confidence"),
                );
            }
            let _ = writeln!(out);
        }

        if let Some(notes) = ctx
            .metadata(EntityType::Variable)
            .get("monitoring_notes")
            .and_then(|v| v.as_array())
        {
            let _ = writeln!(out, "## Monitoring notes\n");
            for note in notes {
                if let Some(note) = note.as_str() {
                    let _ = writeln!(out, "- {}", note);
                }
            }
        }
        Ok(out)
    }
}

struct GapsReport;

impl Report for GapsReport {
    fn name(&self) -> &'static str {
        "gaps"
    }

    fn output_file(&self) -> &'static str {
        "APPENDIX_GAPS.md"
    }

    fn render(&self, ctx: &ReportContext<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "# APPENDIX: GAPS\n");
        for record in sort_by(ctx.entries(EntityType::Gap), "id", false) {
            let _ = writeln!(
                out,
                "- **{}** {} — {}",
                field(record, "id"),
                field(record, "name"),
                field(record, "status"),
            );
        }
        Ok(out)
    }
}

struct TrapsReport;

impl Report for TrapsReport {
    fn name(&self) -> &'static str {
        "traps"
    }

    fn output_file(&self) -> &'static str {
        "ISA_TRAPS.md"
    }

    fn render(&self, ctx: &ReportContext<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "# ANALYTICAL TRAPS\n");
        for record in sort_by(ctx.entries(EntityType::Trap), "id", false) {
            let _ = writeln!(out, "## {} — {}\n", field(record, "id"), field(record, "name"));
            let description = field(record, "description");
            if !description.is_empty() {
                let _ = writeln!(out, "{}\n", description);
            }
        }
        Ok(out)
    }
}

struct ScenariosReport;

impl Report for ScenariosReport {
    fn name(&self) -> &'static str {
        "scenarios"
    }

    fn output_file(&self) -> &'static str {
        "ISA_SCENARIOS.md"
    }

    fn render(&self, ctx: &ReportContext<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "# SCENARIOS\n");
        for record in ctx.entries(EntityType::Scenario) {
            let _ = writeln!(out, "## {} — {}\n", field(record, "id"), field(record, "name"));
            let probability = field(record, "probability");
            if !probability.is_empty() {
                let _ = writeln!(out, "Probability: {}\n", probability);
            }
        }
        Ok(out)
    }
}

struct MasterIndexReport;

impl Report for MasterIndexReport {
    fn name(&self) -> &'static str {
        "index"
    }

    fn output_file(&self) -> &'static str {
        "00_MASTER_INDEX.md"
    }

    fn render(&self, ctx: &ReportContext<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "# MASTER INDEX\n");
        let _ = writeln!(out, "Built {}\n", ctx.build_date());
        for ty in EntityType::ALL {
            let _ = writeln!(out, "- {}: {} entries", ty, ctx.entries(ty).len());
        }
        Ok(out)
    }
}
