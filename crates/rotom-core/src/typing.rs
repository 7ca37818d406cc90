//! Typed views over upstream elemental Type documents.

use crate::pokemon::NamedResource;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Damage-relation sets of one attacking type.
///
/// Every set is defaulted: a document missing `damage_relations` behaves as
/// a type with no relations (multiplier stays at 1.0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

impl DamageRelations {
    pub fn doubles_against(&self, type_name: &str) -> bool {
        self.double_damage_to.iter().any(|t| t.name == type_name)
    }

    pub fn halves_against(&self, type_name: &str) -> bool {
        self.half_damage_to.iter().any(|t| t.name == type_name)
    }

    pub fn blanks_against(&self, type_name: &str) -> bool {
        self.no_damage_to.iter().any(|t| t.name == type_name)
    }
}

/// Typed view of an upstream Type document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

impl TypeRecord {
    /// Deserialize the typed view out of a cached document.
    pub fn from_document(document: &Value) -> Result<Self> {
        serde_json::from_value(document.clone()).map_err(Error::from)
    }
}
