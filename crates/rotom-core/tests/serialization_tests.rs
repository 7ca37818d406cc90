//! Serialization tests for rotom-core types: wire field names must match
//! what the upstream API produces and what API consumers expect.

use rotom_core::compare::{ComparisonResult, StatComparison, TypeComparison, Winner};
use rotom_core::pokemon::PokemonRecord;
use rotom_core::typing::TypeRecord;
use serde_json::json;

#[test]
fn test_winner_tags_serialize_lowercase() {
    assert_eq!(serde_json::to_value(Winner::P1).unwrap(), json!("p1"));
    assert_eq!(serde_json::to_value(Winner::P2).unwrap(), json!("p2"));
    assert_eq!(serde_json::to_value(Winner::Tie).unwrap(), json!("tie"));
}

#[test]
fn test_pokemon_record_roundtrip_keeps_type_field_name() {
    let document = json!({
        "id": 25,
        "name": "pikachu",
        "stats": [{"base_stat": 90, "stat": {"name": "speed", "url": ""}}],
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
        "sprites": {"front_default": "https://example.test/25.png"}
    });

    let record = PokemonRecord::from_document(&document).expect("deserialize");
    assert_eq!(record.types[0].type_.name, "electric");

    // The summary must serialize the slot back under the upstream "type" key.
    let summary = serde_json::to_value(record.summary()).expect("serialize");
    assert_eq!(summary["types"][0]["type"]["name"], "electric");
}

#[test]
fn test_type_record_parses_damage_relations() {
    let document = json!({
        "name": "electric",
        "damage_relations": {
            "double_damage_to": [{"name": "water", "url": ""}],
            "half_damage_to": [{"name": "grass", "url": ""}],
            "no_damage_to": [{"name": "ground", "url": ""}]
        }
    });

    let record = TypeRecord::from_document(&document).expect("deserialize");
    assert!(record.damage_relations.doubles_against("water"));
    assert!(record.damage_relations.blanks_against("ground"));
}

#[test]
fn test_comparison_result_field_names() {
    let record = PokemonRecord::from_document(&json!({
        "id": 1, "name": "bulbasaur", "stats": [], "types": [], "sprites": {}
    }))
    .expect("deserialize");

    let result = ComparisonResult {
        p1: record.summary(),
        p2: record.summary(),
        stats: vec![StatComparison {
            stat: "hp".to_string(),
            p1: 45,
            p2: 45,
            winner: Winner::Tie,
        }],
        type_compare: TypeComparison {
            p1_multiplier: 2.0,
            p2_multiplier: 0.5,
            winner: Winner::P1,
        },
    };

    let value = serde_json::to_value(&result).expect("serialize");
    assert_eq!(value["stats"][0]["winner"], json!("tie"));
    assert_eq!(value["type_compare"]["p1_multiplier"], json!(2.0));
    assert_eq!(value["type_compare"]["winner"], json!("p1"));
    assert_eq!(value["p1"]["name"], json!("bulbasaur"));
}
