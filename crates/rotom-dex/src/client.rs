//! Upstream PokéAPI client.

use async_trait::async_trait;
use reqwest::Client;
use rotom_core::ports::Upstream;
use rotom_core::{Error, ResourceKind, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Public PokéAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Bound on every upstream call. A slow upstream reads as absent, the same
/// as a non-2xx status.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(6);

/// Reqwest-backed [`Upstream`] implementation.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn resource_url(&self, kind: ResourceKind, key: &str) -> String {
        format!("{}/{}/{}/", self.base_url, kind.segment(), key)
    }

    /// Issue one GET and parse the body. Transport failures and non-2xx
    /// statuses read as `None`; no retry is attempted.
    async fn get_document(&self, url: &str) -> Result<Option<Value>> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(%url, error = %err, "upstream request failed");
                return Ok(None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "upstream returned non-success status");
            return Ok(None);
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| Error::UpstreamBody(e.to_string()))
    }
}

#[async_trait]
impl Upstream for PokeApiClient {
    async fn fetch(&self, kind: ResourceKind, key: &str) -> Result<Option<Value>> {
        self.get_document(&self.resource_url(kind, key)).await
    }

    async fn fetch_index(
        &self,
        kind: ResourceKind,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Value>> {
        let url = format!(
            "{}/{}/?limit={}&offset={}",
            self.base_url,
            kind.segment(),
            limit,
            offset
        );
        self.get_document(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_parsed_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/pikachu/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 25})))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let doc = client.fetch(ResourceKind::Pokemon, "pikachu").await.unwrap();
        assert_eq!(doc, Some(json!({"id": 25})));
    }

    #[tokio::test]
    async fn test_fetch_non_success_reads_as_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/missingno/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let doc = client.fetch(ResourceKind::Pokemon, "missingno").await.unwrap();
        assert!(doc.is_none());

        // 5xx is treated the same way.
        Mock::given(method("GET"))
            .and(path("/type/fire/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let doc = client.fetch(ResourceKind::Type, "fire").await.unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn test_fetch_connect_failure_reads_as_absent() {
        // Bind a port, then drop the listener so nothing is serving it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PokeApiClient::new(format!("http://{}", addr)).unwrap();
        let doc = client.fetch(ResourceKind::Pokemon, "pikachu").await.unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn test_fetch_unparseable_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/glitch/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        assert!(client.fetch(ResourceKind::Pokemon, "glitch").await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_index_sends_pagination_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/"))
            .and(query_param("limit", "3"))
            .and(query_param("offset", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let doc = client
            .fetch_index(ResourceKind::Pokemon, 3, 6)
            .await
            .unwrap();
        assert_eq!(doc, Some(json!({"results": []})));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = PokeApiClient::new("http://example.test/api/v2/").unwrap();
        assert_eq!(
            client.resource_url(ResourceKind::Type, "water"),
            "http://example.test/api/v2/type/water/"
        );
    }
}
