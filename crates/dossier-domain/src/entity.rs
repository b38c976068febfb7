//! Entity type module - the seven record categories of the knowledge base

use std::fmt;

/// One of the seven entity types tracked in the knowledge base.
///
/// Every record belongs to exactly one entity type. Each type owns a data
/// file in the store directory, a JSON Schema document, and an identifier
/// field whose values must be unique within the type's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    /// Tracked analytical variable (stock/flow/threshold/... tables)
    Variable,

    /// Known gap in coverage or understanding
    Gap,

    /// Analytical trap (failure mode to avoid)
    Trap,

    /// Recorded observation
    Observation,

    /// Forward scenario
    Scenario,

    /// Working session (identified by number, not id)
    Session,

    /// Analytical module (identified by code, not id)
    Module,
}

impl EntityType {
    /// All entity types, in canonical reporting order.
    pub const ALL: [EntityType; 7] = [
        EntityType::Variable,
        EntityType::Gap,
        EntityType::Trap,
        EntityType::Observation,
        EntityType::Scenario,
        EntityType::Session,
        EntityType::Module,
    ];

    /// Get the plural type name used in data files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Variable => "variables",
            EntityType::Gap => "gaps",
            EntityType::Trap => "traps",
            EntityType::Observation => "observations",
            EntityType::Scenario => "scenarios",
            EntityType::Session => "sessions",
            EntityType::Module => "modules",
        }
    }

    /// Parse an entity type from its plural name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "variables" => Some(EntityType::Variable),
            "gaps" => Some(EntityType::Gap),
            "traps" => Some(EntityType::Trap),
            "observations" => Some(EntityType::Observation),
            "scenarios" => Some(EntityType::Scenario),
            "sessions" => Some(EntityType::Session),
            "modules" => Some(EntityType::Module),
            _ => None,
        }
    }

    /// The field holding this type's unique identifier.
    ///
    /// Sessions are numbered and modules are coded; everything else carries
    /// a plain `id`.
    pub fn id_field(&self) -> &'static str {
        match self {
            EntityType::Session => "number",
            EntityType::Module => "code",
            _ => "id",
        }
    }

    /// File name of this type's collection in the data directory.
    pub fn data_file(&self) -> &'static str {
        match self {
            EntityType::Variable => "variables.yaml",
            EntityType::Gap => "gaps.yaml",
            EntityType::Trap => "traps.yaml",
            EntityType::Observation => "observations.yaml",
            EntityType::Scenario => "scenarios.yaml",
            EntityType::Session => "sessions.yaml",
            EntityType::Module => "modules.yaml",
        }
    }

    /// File name of this type's JSON Schema in the schema directory.
    pub fn schema_file(&self) -> &'static str {
        match self {
            EntityType::Variable => "variable.schema.json",
            EntityType::Gap => "gap.schema.json",
            EntityType::Trap => "trap.schema.json",
            EntityType::Observation => "observation.schema.json",
            EntityType::Scenario => "scenario.schema.json",
            EntityType::Session => "session.schema.json",
            EntityType::Module => "module.schema.json",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown entity type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_names() {
        for ty in EntityType::ALL {
            assert_eq!(EntityType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_id_fields() {
        assert_eq!(EntityType::Variable.id_field(), "id");
        assert_eq!(EntityType::Session.id_field(), "number");
        assert_eq!(EntityType::Module.id_field(), "code");
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(EntityType::parse("widgets"), None);
        assert!("widgets".parse::<EntityType>().is_err());
    }
}
