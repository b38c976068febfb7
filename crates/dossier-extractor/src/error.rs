//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Source document absent (precondition failure for the run)
    #[error("Source document not found: {0}")]
    SourceNotFound(PathBuf),

    /// I/O error reading the source document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entity store error while writing extracted records
    #[error("Store error: {0}")]
    Store(#[from] dossier_store::StoreError),

    /// Record serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
