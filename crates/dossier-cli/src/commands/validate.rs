//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use dossier_domain::EntityType;
use dossier_gatekeeper::{Gatekeeper, ValidationConfig};

/// Execute the validate command. Returns whether validation passed.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let types = selected_types(&args.types)?;
    let validation_config = if args.xref_only {
        ValidationConfig::xref_only()
    } else {
        ValidationConfig::default()
    };

    let gatekeeper = Gatekeeper::new(&config.data_dir, &config.schema_dir, validation_config);
    let report = gatekeeper.run(&types);

    print!("{}", formatter.format_validation_report(&report));
    Ok(report.passed())
}

/// Resolve entity-type arguments, defaulting to every type.
pub fn selected_types(args: &[String]) -> Result<Vec<EntityType>> {
    if args.is_empty() {
        return Ok(EntityType::ALL.to_vec());
    }
    args.iter()
        .map(|name| {
            EntityType::parse(name)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown entity type: {}", name)))
        })
        .collect()
}
