//! Folder read projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use drive_core::types::FileId;

/// The parts of a folder row needed to walk up the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FolderRef {
    /// Folder ID.
    pub id: FileId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (`None` when the folder sits at the drive root).
    pub parent_id: Option<FileId>,
}
