//! Dossier CLI library.
//!
//! Provides the command surface over the knowledge base: validation,
//! report building, and source-document migration, plus configuration
//! loading and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
