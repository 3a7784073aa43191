// ABOUTME: HTTP server for roster, exposing the person store through a REST API.
// ABOUTME: Uses axum with a shared store facade handed to every handler.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, RosterConfig};
pub use routes::create_router;
