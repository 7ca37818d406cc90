//! Port traits (hexagonal architecture).
//!
//! These traits define the interfaces between the core domain and external
//! adapters: the volatile document cache and the upstream HTTP API.

use crate::Result;
use crate::resource::ResourceKind;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Volatile key-value document cache with per-entry TTL.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get an unexpired document. Expired entries read as absent.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a document, fully replacing any existing entry.
    async fn put(&self, key: &str, document: Value, ttl: Duration) -> Result<()>;

    /// Drop an entry if present.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Upstream HTTP capability for fetching documents.
///
/// Passed into the fetch component at construction so tests can substitute
/// a double.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch a single document by kind and (already normalized) key.
    ///
    /// Any non-success outcome (non-2xx status, timeout, connect failure)
    /// is `Ok(None)`; no retry is attempted.
    async fn fetch(&self, kind: ResourceKind, key: &str) -> Result<Option<Value>>;

    /// Fetch a page of the resource index for a kind.
    async fn fetch_index(
        &self,
        kind: ResourceKind,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Value>>;
}
