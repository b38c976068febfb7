//! Build command implementation.

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use dossier_domain::EntityType;
use dossier_gatekeeper::{Gatekeeper, ValidationConfig};
use dossier_render::{build_reports, ReportContext};
use dossier_store::EntityStore;

/// Execute the build command. Returns whether the build (and the optional
/// validation gate) succeeded.
pub fn execute_build(args: BuildArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    if args.validate {
        let gatekeeper = Gatekeeper::new(
            &config.data_dir,
            &config.schema_dir,
            ValidationConfig::default(),
        );
        let report = gatekeeper.run(&EntityType::ALL);
        print!("{}", formatter.format_validation_report(&report));
        if !report.passed() {
            return Ok(false);
        }
    }

    let store = EntityStore::load(&config.data_dir)?;
    let build_date = chrono::Local::now().date_naive().to_string();
    let ctx = ReportContext::new(&store, build_date);

    let targets = if args.reports.is_empty() {
        None
    } else {
        Some(args.reports.as_slice())
    };
    let written = build_reports(&ctx, &config.output_dir, targets)?;

    print!("{}", formatter.format_build_summary(&written));
    Ok(true)
}
