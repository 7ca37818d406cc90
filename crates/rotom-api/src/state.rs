//! Application state shared across handlers.

use rotom_dex::DexManager;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dex: Arc<DexManager>,
}

impl AppState {
    pub fn new(dex: Arc<DexManager>) -> Self {
        Self { dex }
    }
}
