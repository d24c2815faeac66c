//! Breadcrumb path values.

use serde::{Deserialize, Serialize};

use drive_core::types::FileId;

use super::model::FolderRef;

/// One breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Folder ID.
    pub id: FileId,
    /// Folder name.
    pub name: String,
}

impl From<FolderRef> for PathSegment {
    fn from(folder: FolderRef) -> Self {
        Self {
            id: folder.id,
            name: folder.name,
        }
    }
}

/// Root-first list of breadcrumb segments. Empty means the drive root.
pub type FolderPath = Vec<PathSegment>;
