//! Rotom server entrypoint.

use clap::Parser;
use rotom_api::{AppState, build_app};
use rotom_cache::MemoryStore;
use rotom_dex::{DEFAULT_BASE_URL, DexManager, PokeApiClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rotom")]
#[command(author, version, about = "Caching Pokédex API gateway", long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "ROTOM_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Upstream PokéAPI base URL.
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    upstream_base: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let cache = Arc::new(MemoryStore::new());
    let upstream = Arc::new(PokeApiClient::new(&args.upstream_base)?);
    let dex = Arc::new(DexManager::new(upstream, cache));
    let state = Arc::new(AppState::new(dex));

    let listener = TcpListener::bind(args.bind).await?;
    info!(bind = %args.bind, upstream = %args.upstream_base, "rotom listening");
    axum::serve(listener, build_app(state)).await?;

    Ok(())
}
