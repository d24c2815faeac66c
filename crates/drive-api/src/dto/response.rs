//! Response DTOs.

use serde::{Deserialize, Serialize};

use drive_entity::file::FileNode;
use drive_entity::folder::FolderPath;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Breadcrumb response, root-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    /// Path segments.
    pub path: FolderPath,
}

/// Folder listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesResponse {
    /// Nodes in the folder.
    pub files: Vec<FileNode>,
}

/// Single node response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResponse {
    /// The node.
    pub file: FileNode,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
