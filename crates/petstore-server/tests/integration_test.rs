//! End-to-end tests for the pet store HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! PetService -> InMemoryStore -> HTTP response. Requests go through
//! `tower::ServiceExt::oneshot` without starting a network server.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use petstore_server::config::ServerConfig;
use petstore_server::router::build_router;
use petstore_server::service::LookupMode;
use petstore_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Fresh router over an empty store in placeholder mode.
fn test_app() -> Router {
    build_router(AppState::in_memory())
}

/// Router over the sample pets in the given lookup mode.
fn seeded_app(lookup: LookupMode) -> Router {
    let config = ServerConfig {
        seed: true,
        lookup,
        ..ServerConfig::default()
    };
    build_router(AppState::new(&config))
}

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    json: serde_json::Value,
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    TestResponse {
        status,
        headers,
        json,
    }
}

async fn get(app: &Router, path: &str) -> TestResponse {
    send(
        app,
        Request::builder().uri(path).body(Body::empty()).unwrap(),
    )
    .await
}

async fn send_json(
    app: &Router,
    method: Method,
    path: &str,
    body: serde_json::Value,
) -> TestResponse {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
    )
    .await
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|pet| pet["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// GET /pet/{petId}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_pet_returns_placeholder_for_unknown_id() {
    let app = test_app();
    let resp = get(&app, "/pet/3").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["id"], 3);
    assert_eq!(resp.json["name"], "dog");
    assert_eq!(
        resp.headers[header::CONTENT_TYPE],
        "application/json"
    );
}

#[tokio::test]
async fn get_pet_rejects_non_integer_id() {
    let app = test_app();
    for path in ["/pet/abc", "/pet/1.5", "/pet/99999999999999999999", "/pet/%FF"] {
        let resp = get(&app, path).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "path {path}");
        assert_eq!(resp.json["success"], false);
        assert_eq!(resp.json["error"]["code"], "INVALID_ID");
    }
}

#[tokio::test]
async fn find_by_status_rejects_repeated_status_key() {
    let app = seeded_app(LookupMode::Placeholder);
    let resp = get(&app, "/pet/findByStatus?status=available&status=sold").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn get_pet_strict_mode_returns_404() {
    let app = seeded_app(LookupMode::Strict);
    let resp = get(&app, "/pet/42").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json["error"]["code"], "NOT_FOUND");

    let resp = get(&app, "/pet/4").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["name"], "Dog 1");
    assert_eq!(resp.json["category"]["name"], "Dogs");
}

// ---------------------------------------------------------------------------
// POST /pet and PUT /pet
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_then_get_returns_stored_pet() {
    let app = test_app();
    let resp = send_json(&app, Method::POST, "/pet", json!({ "id": 1, "name": "rex" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json, json!("SUCCESS"));

    let resp = get(&app, "/pet/1").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["name"], "rex");
    assert_eq!(resp.json["status"], "available");
}

#[tokio::test]
async fn add_and_update_are_last_write_wins() {
    let app = test_app();
    let resp = send_json(&app, Method::POST, "/pet", json!({ "id": 7, "name": "rex" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    let resp = send_json(
        &app,
        Method::PUT,
        "/pet",
        json!({ "id": 7, "name": "max", "status": "sold" }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json, json!("SUCCESS"));

    let resp = get(&app, "/pet/7").await;
    assert_eq!(resp.json["name"], "max");
    assert_eq!(resp.json["status"], "sold");

    // Updating an id that was never added stores it as well.
    let resp = send_json(&app, Method::PUT, "/pet", json!({ "id": 8, "name": "new" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    let resp = send_json(&app, Method::POST, "/pet", json!({ "id": 8, "name": "newer" })).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(get(&app, "/pet/8").await.json["name"], "newer");
}

#[tokio::test]
async fn invalid_bodies_return_405() {
    let app = test_app();
    let bad_bodies = [
        json!({ "name": "no id" }),
        json!({ "id": "one", "name": "rex" }),
        json!({ "id": 1, "name": "rex", "status": "lost" }),
        json!({ "id": 1, "name": "   " }),
        json!(null),
    ];
    for body in bad_bodies {
        for method in [Method::POST, Method::PUT] {
            let resp = send_json(&app, method.clone(), "/pet", body.clone()).await;
            assert_eq!(
                resp.status,
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} body {body}"
            );
            assert_eq!(resp.json["error"]["code"], "INVALID_INPUT");
        }
    }
    // Nothing was stored: id 1 still resolves to the placeholder.
    assert_eq!(get(&app, "/pet/1").await.json["name"], "dog");
}

#[tokio::test]
async fn missing_or_malformed_json_returns_405() {
    let app = test_app();

    let no_content_type = Request::builder()
        .method(Method::POST)
        .uri("/pet")
        .body(Body::from(r#"{"id":1,"name":"rex"}"#))
        .unwrap();
    let resp = send(&app, no_content_type).await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);

    let empty = Request::builder()
        .method(Method::PUT)
        .uri("/pet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();
    let resp = send(&app, empty).await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);

    let truncated = Request::builder()
        .method(Method::POST)
        .uri("/pet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id":1,"#))
        .unwrap();
    let resp = send(&app, truncated).await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.json["success"], false);
}

// ---------------------------------------------------------------------------
// GET /pet/findByStatus
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_status_returns_only_matching_pets() {
    let app = seeded_app(LookupMode::Placeholder);
    let resp = get(&app, "/pet/findByStatus?status=available,sold").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(ids(&resp.json), vec![1, 2, 4, 5, 7, 8, 9, 10]);
    for pet in resp.json.as_array().unwrap() {
        let status = pet["status"].as_str().unwrap();
        assert!(status == "available" || status == "sold");
    }

    let resp = get(&app, "/pet/findByStatus?status=pending").await;
    assert_eq!(ids(&resp.json), vec![3, 6]);
}

#[tokio::test]
async fn find_by_status_defaults_to_available() {
    let app = seeded_app(LookupMode::Placeholder);
    let expected = vec![1, 2, 4, 7, 8, 9, 10];
    assert_eq!(ids(&get(&app, "/pet/findByStatus").await.json), expected);
    assert_eq!(ids(&get(&app, "/pet/findByStatus?status=").await.json), expected);
}

#[tokio::test]
async fn find_by_status_rejects_unknown_status() {
    let app = seeded_app(LookupMode::Placeholder);
    let resp = get(&app, "/pet/findByStatus?status=available,lost").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn find_by_status_sees_added_pets() {
    let app = test_app();
    assert_eq!(ids(&get(&app, "/pet/findByStatus").await.json), Vec::<i64>::new());

    send_json(
        &app,
        Method::POST,
        "/pet",
        json!({ "id": 20, "name": "sold one", "status": "sold" }),
    )
    .await;
    send_json(&app, Method::POST, "/pet", json!({ "id": 21, "name": "fresh" })).await;

    assert_eq!(ids(&get(&app, "/pet/findByStatus?status=sold").await.json), vec![20]);
    assert_eq!(ids(&get(&app, "/pet/findByStatus").await.json), vec![21]);
}

// ---------------------------------------------------------------------------
// GET /pet/findByTags (deprecated)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_tags_returns_results_with_deprecation_signal() {
    let app = seeded_app(LookupMode::Placeholder);
    let resp = get(&app, "/pet/findByTags?tags=tag1,tag4").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(ids(&resp.json), vec![1, 3, 4, 6, 7, 9, 10]);

    assert_eq!(resp.headers["deprecation"], "true");
    let warning = resp.headers[header::WARNING].to_str().unwrap();
    assert!(warning.starts_with("299"));
    assert!(warning.contains("deprecated"));
}

#[tokio::test]
async fn find_by_tags_requires_tags() {
    let app = seeded_app(LookupMode::Placeholder);
    for path in ["/pet/findByTags", "/pet/findByTags?tags=", "/pet/findByTags?tags=,,"] {
        let resp = get(&app, path).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "path {path}");
        assert_eq!(resp.json["error"]["code"], "BAD_REQUEST");
    }
}

// ---------------------------------------------------------------------------
// GET /openapi.json
// ---------------------------------------------------------------------------

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app();
    let resp = get(&app, "/openapi.json").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["openapi"], "3.0.3");

    let paths = resp.json["paths"].as_object().unwrap();
    for path in ["/pet", "/pet/{petId}", "/pet/findByStatus", "/pet/findByTags"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert_eq!(paths["/pet/findByTags"]["get"]["deprecated"], true);
}

#[tokio::test]
async fn unrouted_methods_are_rejected_by_the_router() {
    let app = test_app();
    let resp = send(
        &app,
        Request::builder()
            .method(Method::DELETE)
            .uri("/pet/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
}
