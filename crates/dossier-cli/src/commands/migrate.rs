//! Migrate command implementation.

use crate::cli::MigrateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use dossier_domain::EntityType;
use dossier_extractor::{ExtractionMetadata, Extractor};

/// Execute the migrate command: extract a source document and write the
/// resulting variables collection into the data directory.
pub fn execute_migrate(args: MigrateArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let extractor = Extractor::new();
    let result = extractor.extract_file(&args.source)?;

    let source_note = args.source_note.unwrap_or_else(|| {
        format!(
            "migrated from {}",
            args.source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| args.source.display().to_string())
        )
    });
    let metadata = ExtractionMetadata {
        version: args.dataset_version,
        date: chrono::Local::now().date_naive().to_string(),
        source: source_note,
    };

    let out_path = config.data_dir.join(EntityType::Variable.data_file());
    extractor.write_store(&result, &metadata, &out_path)?;

    print!("{}", formatter.format_migration_summary(&result, &out_path));
    Ok(true)
}
