//! Listing and move endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

use drive_core::types::{FileId, UserId};
use drive_database::FileStore;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_list_requires_identity() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/files", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_root_folders_first_newest_first() {
    let app = TestApp::new();
    app.store
        .insert(helpers::node("alice", "n-readme", "readme.md", None, false, 1));
    let token = app.token("alice");

    let response = app.request("GET", "/api/files", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.file_names(), vec!["Inbox", "Projects", "readme.md"]);
}

#[tokio::test]
async fn test_list_folder_contents() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files?parentId=f-projects", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.file_names(), vec!["2024", "notes.txt"]);

    let notes = &response.body["files"][1];
    assert_eq!(notes["type"], "text/plain");
    assert_eq!(notes["isFolder"], false);
    assert_eq!(notes["parentId"], "f-projects");
}

#[tokio::test]
async fn test_list_is_owner_scoped() {
    let app = TestApp::new();
    let token = app.token("bob");

    let response = app
        .request("GET", "/api/files?parentId=f-projects", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.file_names().is_empty());
}

#[tokio::test]
async fn test_move_file_into_folder() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/n-notes/move",
            Some(json!({ "targetFolderId": "f-q1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["file"]["parentId"], "f-q1");

    let stored = app
        .store
        .find_node(&FileId::from("n-notes"), &UserId::from("alice"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.parent_id, Some(FileId::from("f-q1")));
}

#[tokio::test]
async fn test_move_folder_to_root() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/f-q1/move",
            Some(json!({ "targetFolderId": null })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["file"]["parentId"].is_null());

    let path = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;
    assert_eq!(path.path_names(), vec!["Q1"]);
}

#[tokio::test]
async fn test_move_into_self_rejected() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/f-2024/move",
            Some(json!({ "targetFolderId": "f-2024" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_move_into_descendant_rejected() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/f-projects/move",
            Some(json!({ "targetFolderId": "f-q1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let path = app
        .request("GET", "/api/files/path?folderId=f-q1", None, Some(&token))
        .await;
    assert_eq!(path.path_names(), vec!["Projects", "2024", "Q1"]);
}

#[tokio::test]
async fn test_move_unknown_node_not_found() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/missing/move",
            Some(json!({ "targetFolderId": "f-inbox" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_move_into_foreign_folder_not_found() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/n-notes/move",
            Some(json!({ "targetFolderId": "f-bob" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_malformed_body_rejected() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/n-notes/move",
            Some(json!({ "targetFolderId": 42 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_unknown_parent_is_empty() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request("GET", "/api/files?parentId=does-not-exist", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "files": [] }));
}

#[tokio::test]
async fn test_move_file_to_current_folder_is_noop() {
    let app = TestApp::new();
    let token = app.token("alice");
    let before = app
        .store
        .find_node(&FileId::from("n-notes"), &UserId::from("alice"))
        .await
        .unwrap()
        .unwrap();

    let response = app
        .request(
            "PATCH",
            "/api/files/n-notes/move",
            Some(json!({ "targetFolderId": "f-projects" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["file"]["parentId"], "f-projects");

    let after = app
        .store
        .find_node(&FileId::from("n-notes"), &UserId::from("alice"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.updated_at, before.updated_at);
}

#[tokio::test]
async fn test_crossing_moves_leave_no_cycle() {
    let app = TestApp::new();
    let token = app.token("alice");

    let (first, second) = tokio::join!(
        app.request(
            "PATCH",
            "/api/files/f-inbox/move",
            Some(json!({ "targetFolderId": "f-projects" })),
            Some(&token),
        ),
        app.request(
            "PATCH",
            "/api/files/f-projects/move",
            Some(json!({ "targetFolderId": "f-inbox" })),
            Some(&token),
        ),
    );

    let mut statuses = vec![first.status, second.status];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);

    // Whichever move won, both folders still hang off the drive root.
    for folder in ["f-inbox", "f-projects"] {
        let path = app
            .request(
                "GET",
                &format!("/api/files/path?folderId={folder}"),
                None,
                Some(&token),
            )
            .await;
        let names = path.path_names();
        assert!(names.len() <= 2, "{folder}: {names:?}");
        assert!(matches!(names[0].as_str(), "Inbox" | "Projects"));
    }
}

#[tokio::test]
async fn test_move_undecodable_id_rejected_as_json() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "PATCH",
            "/api/files/%FF/move",
            Some(json!({ "targetFolderId": null })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_folder_requires_identity() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files/folder",
            Some(json!({ "name": "Drafts", "parentId": null })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_folder_then_list() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "POST",
            "/api/files/folder",
            Some(json!({ "name": "Drafts", "parentId": "f-projects" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let file = &response.body["file"];
    assert_eq!(file["name"], "Drafts");
    assert_eq!(file["isFolder"], true);
    assert_eq!(file["parentId"], "f-projects");
    assert!(file["type"].is_null());

    let listing = app
        .request("GET", "/api/files?parentId=f-projects", None, Some(&token))
        .await;
    assert_eq!(listing.file_names(), vec!["Drafts", "2024", "notes.txt"]);

    let id = file["id"].as_str().unwrap();
    let path = app
        .request(
            "GET",
            &format!("/api/files/path?folderId={id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(path.path_names(), vec!["Projects", "Drafts"]);
}

#[tokio::test]
async fn test_create_folder_at_root() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "POST",
            "/api/files/folder",
            Some(json!({ "name": "Archive", "parentId": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["file"]["parentId"].is_null());

    let listing = app.request("GET", "/api/files", None, Some(&token)).await;
    assert_eq!(listing.file_names()[0], "Archive");
}

#[tokio::test]
async fn test_create_folder_blank_name_rejected() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "POST",
            "/api/files/folder",
            Some(json!({ "name": "   ", "parentId": null })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_folder_in_foreign_parent_not_found() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app
        .request(
            "POST",
            "/api/files/folder",
            Some(json!({ "name": "Sneaky", "parentId": "f-bob" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let bob = app.token("bob");
    let listing = app
        .request("GET", "/api/files?parentId=f-bob", None, Some(&bob))
        .await;
    assert!(listing.file_names().is_empty());
}
