//! Listing, creating and moving drive nodes.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use drive_core::error::AppError;
use drive_core::types::FileId;
use drive_database::store::{FileStore, TreeEdit};
use drive_entity::file::FileNode;

use crate::context::RequestContext;
use crate::folder::path::{PathResolver, WalkStop};

/// Longest folder name accepted, in characters.
const MAX_NAME_LEN: usize = 255;

/// Lists folder contents, creates folders and moves nodes between folders.
#[derive(Debug, Clone)]
pub struct FileService {
    /// Node store.
    store: Arc<dyn FileStore>,
    /// Ancestor walker used to reject moves that would create a cycle.
    resolver: Arc<PathResolver>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(store: Arc<dyn FileStore>, resolver: Arc<PathResolver>) -> Self {
        Self { store, resolver }
    }

    /// Lists the caller's live nodes directly under `parent_id`
    /// (`None` for the drive root), folders first, newest first.
    pub async fn list_children(
        &self,
        ctx: &RequestContext,
        parent_id: Option<&FileId>,
    ) -> Result<Vec<FileNode>, AppError> {
        self.store.list_children(parent_id, &ctx.owner_id).await
    }

    /// Creates an empty folder named `name` under `parent_id`
    /// (`None` for the drive root).
    ///
    /// Surrounding whitespace is dropped from the name. The parent must be a
    /// live folder owned by the caller.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        parent_id: Option<&FileId>,
        name: &str,
    ) -> Result<FileNode, AppError> {
        let owner = &ctx.owner_id;
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::validation(format!(
                "Folder name is longer than {MAX_NAME_LEN} characters"
            )));
        }

        if let Some(parent_id) = parent_id {
            self.store
                .find_folder(parent_id, owner)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Folder {parent_id} not found")))?;
        }

        let now = Utc::now();
        let folder = FileNode {
            id: FileId::new(Uuid::new_v4().to_string()),
            user_id: owner.clone(),
            parent_id: parent_id.cloned(),
            name: name.to_string(),
            mime_type: None,
            size: None,
            is_folder: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self.store.insert_folder(folder).await?;

        info!(
            owner_id = %owner,
            file_id = %created.id,
            parent_id = ?parent_id,
            "Folder created"
        );

        Ok(created)
    }

    /// Moves a node under `target_id` (`None` moves it to the drive root).
    ///
    /// A folder may not be moved into itself or into any of its
    /// descendants. The target's ancestor chain must reach the root within
    /// the depth limit; otherwise the move cannot be proven safe and is
    /// rejected. Checks and write run in one [`TreeEdit`], so two moves of
    /// the same owner never interleave.
    pub async fn move_node(
        &self,
        ctx: &RequestContext,
        node_id: &FileId,
        target_id: Option<&FileId>,
    ) -> Result<FileNode, AppError> {
        let owner = &ctx.owner_id;
        let mut edit = self.store.begin_edit(owner).await?;

        let node = edit
            .find_node(node_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("File {node_id} not found")))?;

        if let Some(target_id) = target_id {
            edit.find_folder(target_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Folder {target_id} not found")))?;

            if target_id == node_id {
                return Err(AppError::validation("Cannot move a folder into itself"));
            }

            if node.is_folder {
                let walk = self.resolver.walk_with(&mut edit, target_id).await?;

                if walk.contains(node_id) {
                    return Err(AppError::validation(
                        "Cannot move a folder into one of its descendants",
                    ));
                }

                match walk.stop {
                    WalkStop::ReachedRoot => {}
                    WalkStop::LookupMiss => {
                        return Err(AppError::validation(
                            "Target folder is not reachable from the drive root",
                        ));
                    }
                    WalkStop::DepthLimit => {
                        return Err(AppError::validation(format!(
                            "Target folder is nested deeper than {} levels",
                            self.resolver.max_depth()
                        )));
                    }
                }
            }
        }

        if node.parent_id.as_ref() == target_id {
            return Ok(node);
        }

        let moved = edit.update_parent(node_id, target_id).await?;
        edit.commit().await?;

        info!(
            owner_id = %owner,
            file_id = %node_id,
            is_folder = moved.is_folder,
            from = ?node.parent_id,
            to = ?target_id,
            "Node moved"
        );

        Ok(moved)
    }
}
