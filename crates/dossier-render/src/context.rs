//! Report context: every collection plus type-level metadata

use dossier_domain::EntityType;
use dossier_store::{EntityStore, Metadata};
use serde_json::Value;

/// Everything a renderer may consult: the full set of loaded collections,
/// per-type metadata, and the build date.
pub struct ReportContext<'a> {
    store: &'a EntityStore,
    build_date: String,
}

impl<'a> ReportContext<'a> {
    /// Assemble a context over a loaded store.
    pub fn new(store: &'a EntityStore, build_date: String) -> Self {
        Self { store, build_date }
    }

    /// Records of one entity type, in file order.
    pub fn entries(&self, ty: EntityType) -> &'a [Value] {
        self.store.entries(ty)
    }

    /// Type-level metadata of one entity type.
    pub fn metadata(&self, ty: EntityType) -> &'a Metadata {
        self.store.metadata(ty)
    }

    /// The build date stamped into rendered documents.
    pub fn build_date(&self) -> &str {
        &self.build_date
    }

    /// A metadata value rendered as a plain string, empty when absent.
    pub fn meta_str(&self, ty: EntityType, key: &str) -> &'a str {
        self.metadata(ty)
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

/// A record field rendered as a plain string, empty when absent.
pub(crate) fn field<'v>(record: &'v Value, key: &str) -> &'v str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_accessors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("traps.yaml"),
            "version: '1.2'\nentries:\n- id: T-01\n  name: Mirror imaging\n",
        )
        .unwrap();

        let store = EntityStore::load(dir.path()).unwrap();
        let ctx = ReportContext::new(&store, "2026-02-24".to_string());

        assert_eq!(ctx.entries(EntityType::Trap).len(), 1);
        assert_eq!(ctx.meta_str(EntityType::Trap, "version"), "1.2");
        assert_eq!(ctx.meta_str(EntityType::Trap, "absent"), "");
        assert_eq!(ctx.build_date(), "2026-02-24");
        assert_eq!(field(&ctx.entries(EntityType::Trap)[0], "name"), "Mirror imaging");
    }
}
