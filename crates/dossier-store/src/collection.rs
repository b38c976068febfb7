//! One entity type's collection: ordered records plus type-level metadata

use crate::{atomic_write, StoreError};
use serde_json::{Map, Value};
use std::path::Path;

/// Free-form type-level metadata: every top-level key except `entries`.
pub type Metadata = Map<String, Value>;

/// An ordered collection of records with sibling metadata.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    metadata: Metadata,
    entries: Vec<Value>,
}

impl Collection {
    /// Build a collection from records and metadata.
    pub fn new(entries: Vec<Value>, metadata: Metadata) -> Self {
        Self { metadata, entries }
    }

    /// Load a collection from a YAML file.
    ///
    /// Accepts both durable shapes: a bare sequence of records, or a mapping
    /// whose `entries` key holds the sequence with metadata as sibling keys.
    /// An empty file loads as an empty collection; an absent file is a
    /// precondition failure reported as [`StoreError::NotFound`].
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text, path)
    }

    fn from_yaml(text: &str, path: &Path) -> Result<Self, StoreError> {
        let doc: Value = serde_yaml::from_str(text)?;
        match doc {
            Value::Null => Ok(Self::default()),
            Value::Array(entries) => Ok(Self {
                metadata: Metadata::new(),
                entries,
            }),
            Value::Object(mut map) => {
                let entries = match map.remove("entries") {
                    Some(Value::Array(entries)) => entries,
                    Some(Value::Null) | None => Vec::new(),
                    Some(other) => {
                        return Err(StoreError::InvalidDocument(format!(
                            "{}: `entries` must be a sequence, got {}",
                            path.display(),
                            kind_name(&other)
                        )))
                    }
                };
                Ok(Self {
                    metadata: map,
                    entries,
                })
            }
            other => Err(StoreError::InvalidDocument(format!(
                "{}: expected sequence or mapping, got {}",
                path.display(),
                kind_name(&other)
            ))),
        }
    }

    /// The records, in file order.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Type-level metadata (everything except `entries`).
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the durable shape and write atomically.
    ///
    /// A collection without metadata saves as a bare sequence; otherwise the
    /// metadata keys come first and `entries` last, matching the
    /// hand-maintained layout.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let doc = if self.metadata.is_empty() {
            Value::Array(self.entries.clone())
        } else {
            let mut map = self.metadata.clone();
            map.insert("entries".to_string(), Value::Array(self.entries.clone()));
            Value::Object(map)
        };
        let text = serde_yaml::to_string(&doc)?;
        atomic_write(path, &text)
    }
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
