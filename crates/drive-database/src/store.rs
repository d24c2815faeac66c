//! Owner-scoped access to drive nodes.

use std::fmt::Debug;

use async_trait::async_trait;

use drive_core::result::AppResult;
use drive_core::types::{FileId, UserId};
use drive_entity::file::FileNode;
use drive_entity::folder::FolderRef;

/// Data access for drive nodes.
///
/// Every method is scoped to `owner`: rows belonging to someone else behave
/// exactly like rows that do not exist. Soft-deleted rows are never returned.
#[async_trait]
pub trait FileStore: Debug + Send + Sync + 'static {
    /// Look up a live folder owned by `owner`.
    ///
    /// Returns `None` when the id is unknown, belongs to another owner,
    /// refers to a file, or has been moved to the trash.
    async fn find_folder(&self, id: &FileId, owner: &UserId) -> AppResult<Option<FolderRef>>;

    /// Look up a live node (file or folder) owned by `owner`.
    async fn find_node(&self, id: &FileId, owner: &UserId) -> AppResult<Option<FileNode>>;

    /// List the live children of `parent` (`None` for the drive root),
    /// folders first, then newest first.
    async fn list_children(
        &self,
        parent: Option<&FileId>,
        owner: &UserId,
    ) -> AppResult<Vec<FileNode>>;

    /// Insert a new folder row and return it as stored.
    async fn insert_folder(&self, folder: FileNode) -> AppResult<FileNode>;

    /// Open an exclusive edit of `owner`'s tree.
    ///
    /// Only one edit per owner is open at a time; a second caller waits until
    /// the first one commits or is dropped.
    async fn begin_edit(&self, owner: &UserId) -> AppResult<Box<dyn TreeEdit>>;

    /// Check that the store can serve requests.
    async fn health_check(&self) -> AppResult<()>;
}

/// An exclusive, owner-scoped edit of the folder tree.
///
/// Reads observe the edit's own writes. Writes become visible to everyone
/// else on [`TreeEdit::commit`]; dropping the edit discards them.
#[async_trait]
pub trait TreeEdit: Send {
    /// Same as [`FileStore::find_folder`], inside the edit.
    async fn find_folder(&mut self, id: &FileId) -> AppResult<Option<FolderRef>>;

    /// Same as [`FileStore::find_node`], inside the edit.
    async fn find_node(&mut self, id: &FileId) -> AppResult<Option<FileNode>>;

    /// Re-parent a live node and return the updated row.
    ///
    /// Fails with `NotFound` when the node is not visible to the owner.
    async fn update_parent(
        &mut self,
        id: &FileId,
        parent: Option<&FileId>,
    ) -> AppResult<FileNode>;

    /// Publish the edit's writes and release the tree.
    async fn commit(self: Box<Self>) -> AppResult<()>;
}
