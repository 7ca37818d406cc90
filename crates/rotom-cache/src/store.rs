//! In-memory cache store.

use async_trait::async_trait;
use rotom_core::Result;
use rotom_core::ports::CacheStore;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// One cached document. Writes always replace the whole entry.
struct StoredEntry {
    document: Value,
    expires_at: Instant,
}

impl StoredEntry {
    fn expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

/// Process-wide in-memory document cache.
///
/// Shared behind an `Arc`; concurrent writers race benignly because every
/// put is a full replacement of the entry.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.expired() => return Ok(Some(entry.document.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Evict the expired entry. Re-check under the write lock: a
        // concurrent put may already have replaced it with a fresh one.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(StoredEntry::expired) {
            entries.remove(key);
            debug!(%key, "evicted expired cache entry");
        }
        Ok(None)
    }

    async fn put(&self, key: &str, document: Value, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            StoredEntry {
                document,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MINUTE: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_get_miss() {
        let store = MemoryStore::new();
        assert!(store.get("pokemon:missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new();
        store
            .put("pokemon:pikachu", json!({"id": 25}), MINUTE)
            .await
            .unwrap();

        let doc = store.get("pokemon:pikachu").await.unwrap();
        assert_eq!(doc, Some(json!({"id": 25})));
    }

    #[tokio::test]
    async fn test_put_replaces_existing_entry() {
        let store = MemoryStore::new();
        store.put("type:fire", json!({"v": 1}), MINUTE).await.unwrap();
        store.put("type:fire", json!({"v": 2}), MINUTE).await.unwrap();

        assert_eq!(store.get("type:fire").await.unwrap(), Some(json!({"v": 2})));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let store = MemoryStore::new();
        store
            .put("pokemon:ditto", json!({"id": 132}), Duration::ZERO)
            .await
            .unwrap();

        assert!(store.get("pokemon:ditto").await.unwrap().is_none());
        // The expired entry was evicted on read.
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();
        store.put("type:water", json!({}), MINUTE).await.unwrap();
        store.remove("type:water").await.unwrap();
        assert!(store.get("type:water").await.unwrap().is_none());
    }
}
