//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] dossier_store::StoreError),

    /// Extractor error
    #[error("Extraction error: {0}")]
    Extractor(#[from] dossier_extractor::ExtractorError),

    /// Render error
    #[error("Render error: {0}")]
    Render(#[from] dossier_render::RenderError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
