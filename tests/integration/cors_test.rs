//! CORS preflight tests through the full layer stack.

use axum::http::StatusCode;
use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_preflight_from_configured_origin() {
    let app = TestApp::new();

    let (status, headers) = app
        .preflight("/api/files/folder", "http://localhost:3000", "POST")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn test_preflight_from_unknown_origin_not_allowed() {
    let app = TestApp::new();

    let (_, headers) = app
        .preflight("/api/files", "https://evil.example", "GET")
        .await;

    assert!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
