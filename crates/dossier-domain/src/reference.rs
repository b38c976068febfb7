//! Entity reference module - cross-references as typed pointers
//!
//! Cross-references in the store are plain strings (`"SV-04"`, `"T-02"`).
//! Rather than string-match ad hoc at every call site, a reference is parsed
//! once into an [`EntityRef`] carrying the target type inferred from the
//! identifier prefix convention; resolution then becomes a single lookup
//! against the right identifier set, with an explicit union-search fallback
//! when no convention matches.

use crate::entity::EntityType;

/// Identifier prefix → target entity type.
///
/// Longest prefixes first so `OBS-` wins over a hypothetical shorter match.
const PREFIX_CONVENTIONS: &[(&str, EntityType)] = &[
    ("OBS-", EntityType::Observation),
    ("SV-", EntityType::Variable),
    ("FV-", EntityType::Variable),
    ("TV-", EntityType::Variable),
    ("PO-", EntityType::Variable),
    ("NQ-", EntityType::Variable),
    ("SC-", EntityType::Scenario),
    ("G-", EntityType::Gap),
    ("T-", EntityType::Trap),
    ("M-", EntityType::Module),
];

/// A cross-reference value parsed into a typed pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    /// The raw identifier string, exactly as it appears in the record.
    pub raw: String,

    /// Target type, when the schema declares it or the prefix convention
    /// pins it down. `None` means resolution must search every type.
    pub target: Option<EntityType>,
}

impl EntityRef {
    /// Build a reference with an explicitly declared target type.
    pub fn declared(raw: impl Into<String>, target: EntityType) -> Self {
        Self {
            raw: raw.into(),
            target: Some(target),
        }
    }

    /// Build a reference by inferring the target from the prefix convention.
    pub fn infer(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let target = infer_target(&raw);
        Self { raw, target }
    }
}

/// Infer a reference's target type from its identifier prefix, if any
/// convention matches.
pub fn infer_target(raw: &str) -> Option<EntityType> {
    PREFIX_CONVENTIONS
        .iter()
        .find(|(prefix, _)| raw.starts_with(prefix))
        .map(|(_, ty)| *ty)
}
