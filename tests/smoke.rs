// ABOUTME: End-to-end smoke test for the roster REST API.
// ABOUTME: Walks person create, list, fetch, the 404 path, and the availability probe.

use std::sync::Arc;

use axum::body::Body;
use http::Request;
use roster_server::{AppState, create_router};
use roster_store::{PersonStore, StoreHandle};
use tower::ServiceExt;

/// Helper to create a test AppState backed by a store in a temp directory.
fn test_app_state(db_path: &std::path::Path) -> Arc<AppState> {
    let handle = StoreHandle::open(db_path).unwrap();
    Arc::new(AppState::new(PersonStore::new(handle)))
}

/// Helper to extract a JSON body from a response.
async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn smoke_test_person_lifecycle() {
    // 1. Open a store in a temp dir and build the app state
    let dir = tempfile::TempDir::new().unwrap();
    let state = test_app_state(&dir.path().join("roster.db"));

    // 2. GET /api/test/available -> the canned availability answer
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(
            Request::get("/api/test/available")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "availability probe should return 200");
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"yes!", "probe body should be the canned string");

    // 3. POST /api/persons -> create the first person
    let app = create_router(Arc::clone(&state));
    let create_body = serde_json::json!({
        "firstName": "Henriette",
        "lastName": "Dellerup"
    });

    let resp = app
        .oneshot(
            Request::post("/api/persons")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 201, "create person should return 201");
    let json = json_body(resp).await;
    assert_eq!(json["id"], 1, "first created person should get id 1");
    assert_eq!(json["firstName"], "Henriette");
    assert_eq!(json["lastName"], "Dellerup");

    // 4. POST /api/persons -> create the second person
    let app = create_router(Arc::clone(&state));
    let create_body = serde_json::json!({
        "firstName": "Kasandra",
        "lastName": "Black"
    });

    let resp = app
        .oneshot(
            Request::post("/api/persons")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 201, "create person should return 201");
    let json = json_body(resp).await;
    assert_eq!(json["id"], 2, "second created person should get id 2");

    // 5. GET /api/persons -> both records come back
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/api/persons").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "list persons should return 200");
    let json = json_body(resp).await;
    let persons = json.as_array().unwrap();
    assert_eq!(persons.len(), 2, "list should contain both created persons");
    assert_eq!(persons[0]["firstName"], "Henriette");
    assert_eq!(persons[1]["firstName"], "Kasandra");

    // 6. GET /api/persons/1 -> fields round-trip
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/api/persons/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "get person should return 200");
    let json = json_body(resp).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["firstName"], "Henriette");
    assert_eq!(json["lastName"], "Dellerup");

    // 7. GET /api/persons/9999 -> explicit absence, not a crash
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/api/persons/9999").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), 404, "missing person should return 404");
    let json = json_body(resp).await;
    assert_eq!(json["error"], "person not found");

    // 8. POST /api/persons with empty names -> accepted, no validation
    let app = create_router(Arc::clone(&state));
    let create_body = serde_json::json!({ "firstName": "", "lastName": "" });

    let resp = app
        .oneshot(
            Request::post("/api/persons")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 201, "empty names should still be accepted");
    let json = json_body(resp).await;
    assert_eq!(json["id"], 3);
    assert_eq!(json["firstName"], "");
}
