//! Health endpoint tests.

use std::sync::Arc;

use axum::http::StatusCode;

use crate::helpers::{FailingStore, TestApp};

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_ready_with_memory_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health/ready", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ready");
}

#[tokio::test]
async fn test_ready_reports_store_outage() {
    let app = TestApp::with_store(Arc::new(FailingStore));

    let response = app.request("GET", "/api/health/ready", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");
}
