//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
///
/// Per-record problems are never errors; they accumulate into the
/// [`crate::ValidationReport`]. This enum covers failures of the validation
/// machinery itself.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// A schema document failed to load or compile
    #[error("Schema error: {0}")]
    Schema(String),
}
