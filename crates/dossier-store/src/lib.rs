//! Dossier Storage Layer
//!
//! The Entity Store: one YAML file per entity type, each holding an ordered
//! sequence of records plus optional type-level metadata.
//!
//! # Durable format
//!
//! A collection file is either a bare YAML sequence of records, or a mapping
//! with a reserved `entries` key holding that sequence and free-form metadata
//! stored as sibling keys (`version`, `date`, `source`, `monitoring_notes`).
//! Records are field-name → value mappings; the store does not interpret
//! fields beyond the type's identifier.
//!
//! # Atomicity
//!
//! Saves never truncate in place: content is written to a temporary file in
//! the destination directory and renamed over the target, so a crash leaves
//! either the old file or the new one, never a partial write.
//!
//! # Examples
//!
//! ```no_run
//! use dossier_store::EntityStore;
//! use dossier_domain::EntityType;
//!
//! let store = EntityStore::load("data").unwrap();
//! let variables = store.entries(EntityType::Variable);
//! println!("{} variables loaded", variables.len());
//! ```

#![warn(missing_docs)]

mod collection;
mod helpers;

pub use collection::{Collection, Metadata};
pub use helpers::{filter_by, sort_by};

use dossier_domain::EntityType;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Data file absent (precondition failure for the affected type)
    #[error("Data file not found: {0}")]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse or serialize error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Document shape is neither a sequence nor an `entries` mapping
    #[error("Invalid collection document: {0}")]
    InvalidDocument(String),
}

/// In-memory snapshot of every entity type's collection.
///
/// Each run loads its own snapshot; nothing is shared across invocations.
pub struct EntityStore {
    data_dir: PathBuf,
    collections: BTreeMap<EntityType, Collection>,
}

impl EntityStore {
    /// Load all entity types from a data directory.
    ///
    /// Missing files yield empty collections; rendering tolerates partial
    /// data. Validation paths that must fail on absence use
    /// [`Collection::load`] directly.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let mut collections = BTreeMap::new();
        for ty in EntityType::ALL {
            let path = data_dir.join(ty.data_file());
            let collection = match Collection::load(&path) {
                Ok(c) => c,
                Err(StoreError::NotFound(_)) => {
                    debug!(entity_type = %ty, "data file absent, loading empty collection");
                    Collection::default()
                }
                Err(e) => return Err(e),
            };
            collections.insert(ty, collection);
        }
        Ok(Self {
            data_dir,
            collections,
        })
    }

    /// The directory this store was loaded from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The collection for one entity type.
    pub fn collection(&self, ty: EntityType) -> &Collection {
        &self.collections[&ty]
    }

    /// The records of one entity type, in file order.
    pub fn entries(&self, ty: EntityType) -> &[Value] {
        self.collection(ty).entries()
    }

    /// Type-level metadata of one entity type.
    pub fn metadata(&self, ty: EntityType) -> &Metadata {
        self.collection(ty).metadata()
    }

    /// Replace one type's collection and persist it atomically.
    pub fn save_collection(
        &mut self,
        ty: EntityType,
        collection: Collection,
    ) -> Result<(), StoreError> {
        let path = self.data_dir.join(ty.data_file());
        collection.save(&path)?;
        self.collections.insert(ty, collection);
        Ok(())
    }
}

/// Extract a record's identifier for the given entity type.
///
/// Session numbers are numeric in YAML; they are stringified so duplicate
/// detection and cross-reference indexing work over one string space.
pub fn record_id(record: &Value, ty: EntityType) -> Option<String> {
    match record.get(ty.id_field())? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Write `contents` to `path` atomically: temp file in the same directory,
/// then rename over the destination.
pub fn atomic_write(path: &Path, contents: &str) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
