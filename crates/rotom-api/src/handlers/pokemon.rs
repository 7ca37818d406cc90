//! Pokémon proxy handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use rotom_core::ResourceKind;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::handlers::{ErrorResponse, detail, internal_error};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    20
}

/// Proxy a single Pokémon document, resolved through the cache.
pub async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Json<Value>, ErrorResponse> {
    let document = state
        .dex
        .resolve(ResourceKind::Pokemon, &identifier)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Not found"))?;

    Ok(Json(document))
}

/// Proxy one page of the Pokémon index.
pub async fn list_pokemon(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ErrorResponse> {
    let document = state
        .dex
        .pokemon_index(params.limit, params.offset)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Not found"))?;

    Ok(Json(document))
}
