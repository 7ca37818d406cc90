//! Upstream access and orchestration for Rotom.
//!
//! [`PokeApiClient`] is the reqwest adapter for the public PokéAPI;
//! [`DexManager`] combines it with the document cache and derives
//! comparisons.

pub mod client;
pub mod manager;

pub use client::{DEFAULT_BASE_URL, PokeApiClient, UPSTREAM_TIMEOUT};
pub use manager::DexManager;
