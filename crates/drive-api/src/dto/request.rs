//! Request DTOs.

use serde::{Deserialize, Serialize};

use drive_core::types::FileId;

/// Query string for `GET /api/files/path`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathQuery {
    /// Folder to resolve. Absent or empty means the drive root.
    pub folder_id: Option<String>,
}

impl PathQuery {
    /// The requested folder, with an empty string read as the root.
    pub fn folder_id(&self) -> Option<FileId> {
        non_empty_id(self.folder_id.as_deref())
    }
}

/// Query string for `GET /api/files`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesQuery {
    /// Folder to list. Absent or empty means the drive root.
    pub parent_id: Option<String>,
}

impl ListFilesQuery {
    /// The requested parent, with an empty string read as the root.
    pub fn parent_id(&self) -> Option<FileId> {
        non_empty_id(self.parent_id.as_deref())
    }
}

/// Body for `PATCH /api/files/{id}/move`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveFileRequest {
    /// Destination folder. `null` or empty moves the node to the root.
    #[serde(default)]
    pub target_folder_id: Option<String>,
}

impl MoveFileRequest {
    /// The destination folder, with an empty string read as the root.
    pub fn target_folder_id(&self) -> Option<FileId> {
        non_empty_id(self.target_folder_id.as_deref())
    }
}

/// Body for `POST /api/files/folder`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Name of the new folder.
    #[serde(default)]
    pub name: String,
    /// Folder to create it in. `null` or empty means the drive root.
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl CreateFolderRequest {
    /// The parent folder, with an empty string read as the root.
    pub fn parent_id(&self) -> Option<FileId> {
        non_empty_id(self.parent_id.as_deref())
    }
}

// Ids are opaque: only the empty string means "root", whitespace is kept.
fn non_empty_id(raw: Option<&str>) -> Option<FileId> {
    raw.filter(|s| !s.is_empty()).map(FileId::from)
}
