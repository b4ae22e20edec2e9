//! HTTP Route Tests
//!
//! Drives the full router (health, `/api`, fallback, layers) with
//! `tower::ServiceExt::oneshot`; no socket is bound.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use votetally::http_server::{HttpServer, HttpServerConfig};
use votetally::rest_api::VotingHandler;

use common::{sqlite_handler, FailingStore, RecordingStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn app(handler: VotingHandler) -> Router {
    HttpServer::with_config(HttpServerConfig::default(), handler).router()
}

fn empty_app() -> Router {
    app(VotingHandler::new(Arc::new(RecordingStore::default())))
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    call(app, request).await
}

async fn send_form(app: &Router, uri: &str, form: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    call(app, request).await
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&empty_app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_path_is_bare_404() {
    let (status, body) = send(&empty_app(), Method::GET, "/api/ballots", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&empty_app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let (status, body) = send(&empty_app(), Method::GET, "/api/voter/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid id: abc"}));
}

// =============================================================================
// Error Envelope
// =============================================================================

#[tokio::test]
async fn test_validation_error_envelope() {
    let (status, body) = send(
        &empty_app(),
        Method::POST,
        "/api/vote",
        Some(json!({"voter_id": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No candidate_id specified."}));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/voter")
        .header("content-type", "application/json")
        .body(Body::from("{\"first_name\":"))
        .unwrap();

    let (status, body) = call(&empty_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let app = app(VotingHandler::new(Arc::new(FailingStore)));

    let (status, body) = send(&app, Method::GET, "/api/candidates", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "connection refused"}));
}

// =============================================================================
// Form Bodies
// =============================================================================

#[tokio::test]
async fn test_form_vote_accepted() {
    let (status, body) = send_form(&empty_app(), "/api/vote", "voter_id=1&candidate_id=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"], json!({"voter_id": "1", "candidate_id": "2"}));
}

#[tokio::test]
async fn test_form_empty_field_is_missing() {
    let (status, body) = send_form(&empty_app(), "/api/vote", "voter_id=1&candidate_id=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No candidate_id specified."}));
}

#[tokio::test]
async fn test_form_candidate_stored_with_flag() {
    let app = app(sqlite_handler().await);

    let (status, _) = send_form(
        &app,
        "/api/candidate",
        "first_name=Katherine&last_name=Mansfield&industry_connected=1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/candidate/1", None).await;
    assert_eq!(body["data"]["last_name"], "Mansfield");
    assert_eq!(body["data"]["industry_connected"], json!(true));
}

// =============================================================================
// End to End
// =============================================================================

#[tokio::test]
async fn test_voter_round_trip() {
    let app = app(sqlite_handler().await);

    let payload = json!({"first_name": "Jack", "last_name": "London", "email": "jl@ever.com"});
    let (status, body) = send(&app, Method::POST, "/api/voter", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"], payload);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&app, Method::GET, "/api/voters", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["email"], "jl@ever.com");

    let (_, body) = send(&app, Method::DELETE, "/api/voter/1", None).await;
    assert_eq!(body, json!({"message": "deleted", "changes": 1, "id": 1}));
}

#[tokio::test]
async fn test_update_missing_candidate_is_not_found() {
    let app = app(sqlite_handler().await);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/candidate/9",
        Some(json!({"party_id": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Candidate not found"}));
}

#[tokio::test]
async fn test_vote_then_tally() {
    let app = app(sqlite_handler().await);

    let candidate = json!({"first_name": "Virginia", "last_name": "Woolf", "industry_connected": true});
    send(&app, Method::POST, "/api/candidate", Some(candidate)).await;
    let voter = json!({"first_name": "James", "last_name": "Fraser", "email": "jf@goldenbough.edu"});
    send(&app, Method::POST, "/api/voter", Some(voter)).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/vote",
        Some(json!({"voter_id": 1, "candidate_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changes"], 1);

    let (_, body) = send(&app, Method::GET, "/api/vote", None).await;
    assert_eq!(body["data"][0]["count"], 1);
    assert_eq!(body["data"][0]["first_name"], "Virginia");
    assert_eq!(body["data"][0]["industry_connected"], json!(true));
}
