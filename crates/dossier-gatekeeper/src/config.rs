//! Gatekeeper configuration

/// Configuration for validation passes
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Enable duplicate identifier detection
    pub check_duplicates: bool,

    /// Enable JSON Schema conformance checking
    pub check_schemas: bool,

    /// Enable cross-reference resolution
    pub check_cross_references: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_duplicates: true,
            check_schemas: true,
            check_cross_references: true,
        }
    }
}

impl ValidationConfig {
    /// Configuration for a cross-reference-only pass.
    pub fn xref_only() -> Self {
        Self {
            check_duplicates: false,
            check_schemas: false,
            check_cross_references: true,
        }
    }
}
