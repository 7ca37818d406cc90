//! Typed views over upstream Pokémon documents.
//!
//! Documents are cached and proxied as raw JSON; these types are the lens
//! the comparator reads them through.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `{name, url}` reference, the shape the upstream API embeds everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One `{stat, base_stat}` pair from a Pokémon document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub base_stat: i64,
    #[serde(default)]
    pub stat: NamedResource,
}

/// One type slot from a Pokémon document (each Pokémon carries 1 or 2).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type", default)]
    pub type_: NamedResource,
}

/// Typed view of an upstream Pokémon document.
///
/// Stats and types are defaulted so a document with missing entries still
/// compares; absent stats read 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Value,
}

impl PokemonRecord {
    /// Deserialize the typed view out of a cached document.
    pub fn from_document(document: &Value) -> Result<Self> {
        serde_json::from_value(document.clone()).map_err(Error::from)
    }

    /// Base value for a stat, looked up by upstream stat name.
    pub fn base_stat(&self, stat: &str) -> i64 {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat)
            .map(|s| s.base_stat)
            .unwrap_or(0)
    }

    /// The Pokémon's own type names, in slot order.
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.type_.name.clone()).collect()
    }

    /// Trim to the minimal shape used in comparison responses.
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            id: self.id,
            name: self.name.clone(),
            sprites: self.sprites.clone(),
            types: self.types.clone(),
        }
    }
}

/// Minimal projection of a Pokémon, keeping response payloads small.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: i64,
    pub name: String,
    pub sprites: Value,
    pub types: Vec<TypeSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulbasaur() -> Value {
        json!({
            "id": 1,
            "name": "bulbasaur",
            "stats": [
                {"base_stat": 45, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 49, "stat": {"name": "attack", "url": ""}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": ""}},
                {"slot": 2, "type": {"name": "poison", "url": ""}}
            ],
            "sprites": {"front_default": "https://example.test/1.png"}
        })
    }

    #[test]
    fn test_base_stat_lookup_defaults_to_zero() {
        let record = PokemonRecord::from_document(&bulbasaur()).unwrap();
        assert_eq!(record.base_stat("hp"), 45);
        assert_eq!(record.base_stat("attack"), 49);
        assert_eq!(record.base_stat("speed"), 0);
    }

    #[test]
    fn test_type_names_preserve_slot_order() {
        let record = PokemonRecord::from_document(&bulbasaur()).unwrap();
        assert_eq!(record.type_names(), vec!["grass", "poison"]);
    }

    #[test]
    fn test_summary_keeps_id_name_sprites_types() {
        let record = PokemonRecord::from_document(&bulbasaur()).unwrap();
        let summary = record.summary();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.name, "bulbasaur");
        assert_eq!(summary.sprites["front_default"], "https://example.test/1.png");
        assert_eq!(summary.types.len(), 2);
    }

    #[test]
    fn test_document_without_id_is_rejected() {
        let malformed = json!({"name": "missingno"});
        assert!(PokemonRecord::from_document(&malformed).is_err());
    }
}
