//! Drive node handlers: breadcrumb path, listing, folder creation, and move.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use drive_core::error::AppError;
use drive_core::types::FileId;

use crate::dto::request::{CreateFolderRequest, ListFilesQuery, MoveFileRequest, PathQuery};
use crate::dto::response::{FileResponse, FilesResponse, PathResponse};
use crate::error::ApiError;
use crate::extractors::{ApiPath, ApiQuery, AuthUser};
use crate::state::AppState;

/// GET /api/files/path?folderId=...
pub async fn get_path(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let folder_id = query.folder_id();
    let path = state
        .path_resolver
        .resolve_path(folder_id.as_ref(), &auth.owner_id)
        .await?;

    Ok(Json(PathResponse { path }))
}

/// GET /api/files?parentId=...
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<ListFilesQuery>,
) -> Result<Json<FilesResponse>, ApiError> {
    let parent_id = query.parent_id();
    let files = state
        .file_service
        .list_children(&auth, parent_id.as_ref())
        .await?;

    Ok(Json(FilesResponse { files }))
}

/// POST /api/files/folder
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FileResponse>), ApiError> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let parent = req.parent_id();

    let file = state
        .file_service
        .create_folder(&auth, parent.as_ref(), &req.name)
        .await?;

    Ok((StatusCode::CREATED, Json(FileResponse { file })))
}

/// PATCH /api/files/{id}/move
pub async fn move_file(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<FileId>,
    payload: Result<Json<MoveFileRequest>, JsonRejection>,
) -> Result<Json<FileResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let target = req.target_folder_id();

    let file = state
        .file_service
        .move_node(&auth, &id, target.as_ref())
        .await?;

    Ok(Json(FileResponse { file }))
}
