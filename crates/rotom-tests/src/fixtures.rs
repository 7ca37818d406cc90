//! Test fixtures for building upstream-shaped documents.

use serde_json::{Value, json};

/// The stat names the upstream API reports, in its own order.
const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Factory for upstream Pokémon documents.
pub struct PokemonFixture;

impl PokemonFixture {
    /// A document with a full six-stat table.
    pub fn full(id: i64, name: &str, types: &[&str], stats: [i64; 6]) -> Value {
        let stats: Vec<Value> = STAT_NAMES
            .iter()
            .zip(stats)
            .map(|(stat, value)| json!({"base_stat": value, "stat": {"name": stat, "url": ""}}))
            .collect();
        let types: Vec<Value> = types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
            .collect();

        json!({
            "id": id,
            "name": name,
            "stats": stats,
            "types": types,
            "sprites": {
                "front_default": format!("https://sprites.example.test/{}.png", id)
            }
        })
    }

    pub fn squirtle() -> Value {
        Self::full(7, "squirtle", &["water"], [44, 48, 65, 50, 64, 43])
    }

    pub fn charmander() -> Value {
        Self::full(4, "charmander", &["fire"], [39, 52, 43, 60, 50, 65])
    }

    /// A page of the Pokémon index.
    pub fn index(names: &[&str]) -> Value {
        let results: Vec<Value> = names
            .iter()
            .map(|n| json!({"name": n, "url": format!("https://example.test/pokemon/{}/", n)}))
            .collect();
        json!({"count": names.len(), "next": null, "previous": null, "results": results})
    }
}

/// Factory for upstream Type documents.
pub struct TypeFixture;

impl TypeFixture {
    pub fn with_relations(name: &str, double: &[&str], half: &[&str], no: &[&str]) -> Value {
        let refs = |names: &[&str]| -> Vec<Value> {
            names.iter().map(|n| json!({"name": n, "url": ""})).collect()
        };
        json!({
            "name": name,
            "damage_relations": {
                "double_damage_to": refs(double),
                "half_damage_to": refs(half),
                "no_damage_to": refs(no)
            }
        })
    }

    pub fn water() -> Value {
        Self::with_relations(
            "water",
            &["fire", "ground", "rock"],
            &["water", "grass", "dragon"],
            &[],
        )
    }

    pub fn fire() -> Value {
        Self::with_relations(
            "fire",
            &["grass", "ice", "bug", "steel"],
            &["fire", "water", "rock", "dragon"],
            &[],
        )
    }
}
