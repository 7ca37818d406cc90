//! Resource kinds and cache-key namespacing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache lifetime for Pokémon documents.
pub const POKEMON_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache lifetime for Type documents. Damage relations change far less often
/// than Pokémon data, so these live a full day.
pub const TYPE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Upstream resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Pokemon,
    Type,
}

impl ResourceKind {
    /// URL path segment on the upstream API.
    pub fn segment(&self) -> &'static str {
        match self {
            ResourceKind::Pokemon => "pokemon",
            ResourceKind::Type => "type",
        }
    }

    /// Time-to-live for cached documents of this kind.
    pub fn ttl(&self) -> Duration {
        match self {
            ResourceKind::Pokemon => POKEMON_TTL,
            ResourceKind::Type => TYPE_TTL,
        }
    }

    /// Namespaced cache key. Identifiers are matched case-insensitively, so
    /// the key is always lowercased.
    pub fn cache_key(&self, identifier: &str) -> String {
        format!("{}:{}", self.segment(), identifier.to_lowercase())
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.segment())
    }
}
