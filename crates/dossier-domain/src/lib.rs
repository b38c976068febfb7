//! Dossier Domain Layer
//!
//! This crate contains the core domain model for Dossier: the seven entity
//! types the knowledge base tracks, the table kinds the extractor recognizes,
//! typed cross-reference pointers, and the extracted variable record.
//!
//! ## Key Concepts
//!
//! - **Entity Type**: one of seven record categories (variable, gap, trap,
//!   observation, scenario, session, module), each with its own schema,
//!   data file, and identifier field
//! - **Table Kind**: a source-document table section (stock, flow, threshold,
//!   positive optionality, normalization quality) with its identifier prefix
//! - **Entity Ref**: a cross-reference string modeled as a typed pointer,
//!   with target-type inference from the identifier prefix convention
//! - **Variable Record**: the fully typed output of table extraction
//!
//! ## Architecture
//!
//! Pure domain logic only. Parsing, storage, and validation live in the
//! extractor, store, and gatekeeper crates; this crate defines the vocabulary
//! they share.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod reference;
pub mod table;
pub mod variable;

// Re-exports for convenience
pub use entity::EntityType;
pub use reference::EntityRef;
pub use table::TableKind;
pub use variable::VariableRecord;
