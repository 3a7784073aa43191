// ABOUTME: Person API handlers for listing, creating, and fetching by id.
// ABOUTME: Translates facade results and errors into HTTP responses.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use roster_core::NewPerson;
use serde::Deserialize;

use crate::app_state::SharedState;

/// Request body for creating a new person. Both fields are optional and
/// unvalidated; empty strings are stored as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// GET /api/persons - List all persons in the store.
pub async fn list_persons(State(state): State<SharedState>) -> impl IntoResponse {
    match state.store.list_all() {
        Ok(persons) => Json(persons).into_response(),
        Err(e) => {
            tracing::error!("failed to list persons: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to list persons" })),
            )
                .into_response()
        }
    }
}

/// POST /api/persons - Create a person and return it with its new id.
pub async fn create_person(
    State(state): State<SharedState>,
    Json(req): Json<CreatePersonRequest>,
) -> impl IntoResponse {
    let person = NewPerson::new(req.first_name, req.last_name);

    match state.store.create(person) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => {
            tracing::error!("failed to create person: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to create person" })),
            )
                .into_response()
        }
    }
}

/// GET /api/persons/{id} - Fetch a single person, 404 when absent.
pub async fn get_person(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "invalid person id" })),
            )
                .into_response();
        }
    };

    match state.store.get_by_id(id) {
        Ok(Some(person)) => Json(person).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "person not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to fetch person {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to fetch person" })),
            )
                .into_response()
        }
    }
}
