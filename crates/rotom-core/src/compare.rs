//! Comparison types and the pure comparison math.
//!
//! The async orchestration (resolving type documents through the cache)
//! lives in `rotom-dex`; everything here is a pure function over records
//! that have already been fetched.

use crate::pokemon::{PokemonRecord, PokemonSummary};
use crate::typing::DamageRelations;
use serde::{Deserialize, Serialize};

/// The six stats every comparison reports, in response order.
pub const STAT_ORDER: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Which side won a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    P1,
    P2,
    Tie,
}

impl Winner {
    /// Tag by strict comparison; equal values tie.
    pub fn of<T: PartialOrd>(p1: T, p2: T) -> Self {
        if p1 > p2 {
            Winner::P1
        } else if p2 > p1 {
            Winner::P2
        } else {
            Winner::Tie
        }
    }
}

/// One row of the per-stat comparison table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatComparison {
    pub stat: String,
    pub p1: i64,
    pub p2: i64,
    pub winner: Winner,
}

/// Best type-effectiveness multiplier in each direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeComparison {
    pub p1_multiplier: f64,
    pub p2_multiplier: f64,
    pub winner: Winner,
}

/// Full comparison of two Pokémon. Computed per request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub p1: PokemonSummary,
    pub p2: PokemonSummary,
    pub stats: Vec<StatComparison>,
    pub type_compare: TypeComparison,
}

/// Per-stat rows over [`STAT_ORDER`]. Absent stats read 0 on either side.
pub fn stat_comparisons(p1: &PokemonRecord, p2: &PokemonRecord) -> Vec<StatComparison> {
    STAT_ORDER
        .iter()
        .map(|stat| {
            let a = p1.base_stat(stat);
            let b = p2.base_stat(stat);
            StatComparison {
                stat: (*stat).to_string(),
                p1: a,
                p2: b,
                winner: Winner::of(a, b),
            }
        })
        .collect()
}

/// Damage multiplier of one attacking type against a defender's types.
///
/// Starts at 1.0 and compounds ×2.0 / ×0.5 / ×0.0 per defending type found
/// in the double/half/no-damage sets. The three checks are independent: a
/// defending type flagged in more than one set compounds all of them, and
/// the loop does not short-circuit after reaching 0.0.
pub fn damage_multiplier(relations: &DamageRelations, defending: &[String]) -> f64 {
    let mut multiplier = 1.0;
    for defender in defending {
        if relations.doubles_against(defender) {
            multiplier *= 2.0;
        }
        if relations.halves_against(defender) {
            multiplier *= 0.5;
        }
        if relations.blanks_against(defender) {
            multiplier *= 0.0;
        }
    }
    multiplier
}
