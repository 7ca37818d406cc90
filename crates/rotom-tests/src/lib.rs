//! Integration test infrastructure for Rotom.
//!
//! Tests spin up the real axum application on an ephemeral port, pointed at
//! a wiremock stand-in for the upstream PokéAPI.
//!
//! # Usage
//!
//! ```ignore
//! use rotom_tests::helpers::{ApiTestClient, start_test_server};
//! use wiremock::MockServer;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let upstream = MockServer::start().await;
//!     let (addr, _handle) = start_test_server(&upstream.uri()).await.unwrap();
//!     let client = ApiTestClient::new(addr);
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

/// Initialize test logging (call once per test binary).
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rotom_tests=debug")),
        )
        .with_test_writer()
        .try_init();
}
