// ABOUTME: Route definitions for the roster HTTP API.
// ABOUTME: Assembles all API routes into a single axum Router with shared state.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/test/available", get(available))
        .route(
            "/api/persons",
            get(api::persons::list_persons).post(api::persons::create_person),
        )
        .route("/api/persons/{id}", get(api::persons::get_person))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Availability probe. Returns 200 OK with a canned plain-text body.
async fn available() -> &'static str {
    "yes!"
}
