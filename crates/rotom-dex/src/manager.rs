//! Cache-backed document resolution and the Pokémon comparator.

use rotom_core::compare::{self, ComparisonResult, TypeComparison, Winner};
use rotom_core::pokemon::PokemonRecord;
use rotom_core::ports::{CacheStore, Upstream};
use rotom_core::typing::TypeRecord;
use rotom_core::{ResourceKind, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Resolves upstream documents through the cache and derives comparisons.
///
/// Constructed once at process start; both collaborators are injected so
/// tests can substitute doubles.
pub struct DexManager {
    upstream: Arc<dyn Upstream>,
    cache: Arc<dyn CacheStore>,
}

impl DexManager {
    pub fn new(upstream: Arc<dyn Upstream>, cache: Arc<dyn CacheStore>) -> Self {
        Self { upstream, cache }
    }

    /// Resolve one document by kind and identifier.
    ///
    /// Identifiers are case-insensitive. An unexpired cache hit returns the
    /// stored document without touching upstream; otherwise a single fetch
    /// is issued and, on success, the document is stored with the kind TTL.
    /// `None` covers both "does not exist" and upstream failure.
    pub async fn resolve(&self, kind: ResourceKind, identifier: &str) -> Result<Option<Value>> {
        let ident = identifier.to_lowercase();
        let key = kind.cache_key(&ident);

        if let Some(document) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Some(document));
        }

        match self.upstream.fetch(kind, &ident).await? {
            Some(document) => {
                self.cache.put(&key, document.clone(), kind.ttl()).await?;
                debug!(%key, ttl_secs = kind.ttl().as_secs(), "cached upstream document");
                Ok(Some(document))
            }
            None => {
                debug!(%key, "upstream resolution failed");
                Ok(None)
            }
        }
    }

    /// Resolve one page of the Pokémon index, cached under the Pokémon TTL.
    pub async fn pokemon_index(&self, limit: u32, offset: u32) -> Result<Option<Value>> {
        let key = format!("pokemon:index:{}:{}", limit, offset);

        if let Some(document) = self.cache.get(&key).await? {
            debug!(%key, "cache hit");
            return Ok(Some(document));
        }

        match self
            .upstream
            .fetch_index(ResourceKind::Pokemon, limit, offset)
            .await?
        {
            Some(document) => {
                self.cache
                    .put(&key, document.clone(), ResourceKind::Pokemon.ttl())
                    .await?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    /// Resolve a Type record for the multiplier computation.
    ///
    /// Failure of any sort (absent upstream, transport error, malformed
    /// document) reads as `None`; the caller skips that attacking type.
    async fn resolve_type(&self, name: &str) -> Option<TypeRecord> {
        let document = match self.resolve(ResourceKind::Type, name).await {
            Ok(Some(document)) => document,
            Ok(None) => return None,
            Err(err) => {
                debug!(type_name = %name, error = %err, "type resolution failed");
                return None;
            }
        };
        TypeRecord::from_document(&document).ok()
    }

    /// Best damage multiplier of the `attacking` type names against the
    /// `defending` ones.
    ///
    /// Each attacking type contributes its compounded multiplier and the
    /// maximum wins (the defender faces the attacker's best move type).
    /// Attacking types whose lookup fails contribute nothing, so with no
    /// usable attacking type the result stays 0.0.
    pub async fn best_multiplier(&self, attacking: &[String], defending: &[String]) -> f64 {
        let mut best = 0.0_f64;
        for type_name in attacking {
            let Some(record) = self.resolve_type(type_name).await else {
                continue;
            };
            let multiplier = compare::damage_multiplier(&record.damage_relations, defending);
            if multiplier > best {
                best = multiplier;
            }
        }
        best
    }

    /// Compare two already-resolved Pokémon records.
    pub async fn compare(&self, p1: &PokemonRecord, p2: &PokemonRecord) -> ComparisonResult {
        let stats = compare::stat_comparisons(p1, p2);

        let p1_types = p1.type_names();
        let p2_types = p2.type_names();
        let p1_multiplier = self.best_multiplier(&p1_types, &p2_types).await;
        let p2_multiplier = self.best_multiplier(&p2_types, &p1_types).await;

        ComparisonResult {
            p1: p1.summary(),
            p2: p2.summary(),
            stats,
            type_compare: TypeComparison {
                p1_multiplier,
                p2_multiplier,
                winner: Winner::of(p1_multiplier, p2_multiplier),
            },
        }
    }
}
