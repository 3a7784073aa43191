// ABOUTME: Shared application state for the roster HTTP server.
// ABOUTME: Holds the person store facade handed to every request handler.

use std::sync::Arc;

use roster_store::PersonStore;

/// Shared application state accessible by all axum handlers. The facade is
/// the only state: it opens a private store session per call, so handlers
/// never coordinate around it.
pub struct AppState {
    pub store: PersonStore,
}

/// Type alias for the Arc-wrapped state used with axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState around an opened person store.
    pub fn new(store: PersonStore) -> Self {
        Self { store }
    }
}
