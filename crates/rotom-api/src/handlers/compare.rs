//! Comparison handler.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use rotom_core::ResourceKind;
use rotom_core::compare::ComparisonResult;
use rotom_core::pokemon::PokemonRecord;
use serde::Deserialize;
use std::sync::Arc;

use crate::handlers::{ErrorResponse, detail, internal_error};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompareParams {
    pub p1: Option<String>,
    pub p2: Option<String>,
}

/// Compare two Pokémon: per-stat winners plus the best type-effectiveness
/// multiplier in each direction.
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ComparisonResult>, ErrorResponse> {
    // An empty value counts as missing, matching the original contract.
    let (p1, p2) = match (params.p1.as_deref(), params.p2.as_deref()) {
        (Some(p1), Some(p2)) if !p1.is_empty() && !p2.is_empty() => (p1, p2),
        _ => {
            return Err(detail(
                StatusCode::BAD_REQUEST,
                "p1 and p2 query params required",
            ));
        }
    };

    let a = state
        .dex
        .resolve(ResourceKind::Pokemon, p1)
        .await
        .map_err(internal_error)?;
    let b = state
        .dex
        .resolve(ResourceKind::Pokemon, p2)
        .await
        .map_err(internal_error)?;

    let (Some(a), Some(b)) = (a, b) else {
        return Err(detail(
            StatusCode::NOT_FOUND,
            "One or both pokemon not found",
        ));
    };

    let a = PokemonRecord::from_document(&a).map_err(internal_error)?;
    let b = PokemonRecord::from_document(&b).map_err(internal_error)?;

    Ok(Json(state.dex.compare(&a, &b).await))
}
