//! Drive node entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use drive_core::types::{FileId, UserId};

use crate::folder::FolderRef;

/// A node in a user's drive: either a file or a folder.
///
/// Rows are soft-deleted by setting `deleted_at`; such rows stay in the
/// table (the trash) but are invisible to listing and path resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Unique node identifier.
    pub id: FileId,
    /// The owner of the node.
    pub user_id: UserId,
    /// Containing folder (`None` at the drive root).
    pub parent_id: Option<FileId>,
    /// Display name.
    pub name: String,
    /// MIME type for files; `None` for folders.
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Size in bytes for files.
    pub size: Option<i64>,
    /// Whether this node is a folder.
    pub is_folder: bool,
    /// When the node was created.
    pub created_at: DateTime<Utc>,
    /// When the node was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the node was moved to the trash.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FileNode {
    /// Check if the node has been moved to the trash.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Project this node as a folder reference, if it is a live folder.
    pub fn as_folder_ref(&self) -> Option<FolderRef> {
        if !self.is_folder || self.is_deleted() {
            return None;
        }
        Some(FolderRef {
            id: self.id.clone(),
            name: self.name.clone(),
            parent_id: self.parent_id.clone(),
        })
    }
}
