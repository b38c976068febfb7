//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dossier - validate and render the analytical knowledge base.
#[derive(Debug, Parser)]
#[command(name = "dossier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the per-type YAML data files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the per-type JSON Schema files
    #[arg(long, global = true)]
    pub schema_dir: Option<PathBuf>,

    /// Directory rendered reports are written into
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file path (default: ./dossier.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate entity types against schemas and cross-references
    Validate(ValidateArgs),

    /// Render reports from the validated store
    Build(BuildArgs),

    /// Extract a source document into the entity store
    Migrate(MigrateArgs),
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Entity types to validate (default: all)
    pub types: Vec<String>,

    /// Skip structural checks and only resolve cross-references
    #[arg(long)]
    pub xref_only: bool,
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Reports to build (default: all)
    pub reports: Vec<String>,

    /// Validate the store first; any issue aborts the build
    #[arg(long)]
    pub validate: bool,
}

/// Arguments for the migrate command.
#[derive(Debug, Parser)]
pub struct MigrateArgs {
    /// Source document to extract
    pub source: PathBuf,

    /// Dataset version tag recorded in the written collection
    #[arg(long, default_value = "1.0")]
    pub dataset_version: String,

    /// Provenance note recorded in the written collection
    #[arg(long)]
    pub source_note: Option<String>,
}
