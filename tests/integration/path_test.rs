//! Breadcrumb endpoint tests.

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

use crate::helpers::{self, FailingStore, TestApp};

#[tokio::test]
async fn test_path_requires_identity() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/files/path?folderId=f-q1", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_path_rejects_expired_token() {
    let app = TestApp::new();
    let token = helpers::mint("alice", Utc::now() - Duration::hours(2), helpers::SECRET);

    let response = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_path_rejects_foreign_signature() {
    let app = TestApp::new();
    let token = helpers::mint("alice", Utc::now() + Duration::hours(1), "another-secret");

    let response = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_path_without_folder_is_root() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "path": [] }));
}

#[tokio::test]
async fn test_path_with_empty_folder_is_root() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "path": [] }));
}

#[tokio::test]
async fn test_path_full_chain_root_first() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({
            "path": [
                { "id": "f-projects", "name": "Projects" },
                { "id": "f-2024", "name": "2024" },
                { "id": "f-q1", "name": "Q1" },
            ]
        })
    );
}

#[tokio::test]
async fn test_path_top_level_folder() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=f-inbox", None, Some(&token))
        .await;

    assert_eq!(response.path_names(), vec!["Inbox"]);
}

#[tokio::test]
async fn test_path_stops_below_trashed_ancestor() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=f-kept", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.path_names(), vec!["Kept"]);
}

#[tokio::test]
async fn test_path_of_foreign_folder_is_empty() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=f-bob", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.path_names().is_empty());
}

#[tokio::test]
async fn test_path_of_unknown_folder_is_empty() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=missing", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.path_names().is_empty());
}

#[tokio::test]
async fn test_path_via_session_cookie() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request_with_cookie("/api/files/path?folderId=f-2024", &token)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.path_names(), vec!["Projects", "2024"]);
}

#[tokio::test]
async fn test_path_is_stable_across_requests() {
    let app = TestApp::new();
    let token = app.token("alice");

    let first = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;
    let second = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;

    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_path_cycle_returns_bounded_path() {
    let app = TestApp::new();
    app.store
        .insert(helpers::node("alice", "c-a", "A", Some("c-b"), true, 1));
    app.store
        .insert(helpers::node("alice", "c-b", "B", Some("c-a"), true, 2));
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=c-a", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.path_names().len(), app.config.folders.max_depth);
}

#[tokio::test]
async fn test_path_store_failure_is_masked() {
    let app = TestApp::with_store(Arc::new(FailingStore));
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        serde_json::json!({
            "error": "INTERNAL_ERROR",
            "message": "Internal server error",
        })
    );
}

#[tokio::test]
async fn test_root_path_never_touches_failing_store() {
    let app = TestApp::with_store(Arc::new(FailingStore));
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.path_names().is_empty());
}

#[tokio::test]
async fn test_repeated_folder_id_is_json_validation_error() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "GET",
            "/api/files/path?folderId=f-q1&folderId=f-inbox",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_folder_id_whitespace_is_significant() {
    let app = TestApp::new();
    app.store
        .insert(helpers::node("alice", " f-sp", "Spaced", None, true, 1));
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files/path?folderId=%20f-sp", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.path_names(), vec!["Spaced"]);
}

#[tokio::test]
async fn test_lowercase_bearer_scheme_accepted() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request_with_authorization(
            "/api/files/path?folderId=f-q1",
            &format!("bearer {token}"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.path_names(), vec!["Projects", "2024", "Q1"]);
}
