//! API route definitions.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::handlers::{compare, health, pokemon};
use crate::state::AppState;

/// Create the main API router.
///
/// Resource routes are registered both with and without a trailing slash;
/// existing clients of this service use the slashed form.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pokemon", get(pokemon::list_pokemon))
        .route("/pokemon/", get(pokemon::list_pokemon))
        .route("/pokemon/{identifier}", get(pokemon::get_pokemon))
        .route("/pokemon/{identifier}/", get(pokemon::get_pokemon))
        .route("/compare", get(compare::compare))
        .route("/compare/", get(compare::compare))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state)
}
