//! Dossier CLI - command-line interface for the analytical knowledge base.

use clap::Parser;
use dossier_cli::{commands, Cli, Command, Config, Formatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> dossier_cli::Result<bool> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.with_overrides(
        cli.data_dir,
        cli.schema_dir,
        cli.output_dir,
    );

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Validate(args) => commands::execute_validate(args, &config, &formatter),
        Command::Build(args) => commands::execute_build(args, &config, &formatter),
        Command::Migrate(args) => commands::execute_migrate(args, &config, &formatter),
    }
}
