//! In-process [`FileStore`] backed by a concurrent map.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_core::types::{FileId, UserId};
use drive_entity::file::FileNode;
use drive_entity::folder::FolderRef;

use crate::store::{FileStore, TreeEdit};

/// In-memory node store with the same visibility rules as the SQL one.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    nodes: Arc<DashMap<FileId, FileNode>>,
    /// Held by the open [`TreeEdit`], if any.
    edit_lock: Arc<Mutex<()>>,
}

impl MemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `nodes`.
    pub fn with_nodes(nodes: impl IntoIterator<Item = FileNode>) -> Self {
        let store = Self::new();
        for node in nodes {
            store.insert(node);
        }
        store
    }

    /// Insert or replace a node.
    pub fn insert(&self, node: FileNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    fn visible(&self, id: &FileId, owner: &UserId) -> Option<FileNode> {
        self.nodes
            .get(id)
            .filter(|n| &n.user_id == owner && !n.is_deleted())
            .map(|n| n.value().clone())
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn find_folder(&self, id: &FileId, owner: &UserId) -> AppResult<Option<FolderRef>> {
        Ok(self
            .visible(id, owner)
            .and_then(|node| node.as_folder_ref()))
    }

    async fn find_node(&self, id: &FileId, owner: &UserId) -> AppResult<Option<FileNode>> {
        Ok(self.visible(id, owner))
    }

    async fn list_children(
        &self,
        parent: Option<&FileId>,
        owner: &UserId,
    ) -> AppResult<Vec<FileNode>> {
        let mut children: Vec<FileNode> = self
            .nodes
            .iter()
            .filter(|n| {
                &n.user_id == owner && !n.is_deleted() && n.parent_id.as_ref() == parent
            })
            .map(|n| n.value().clone())
            .collect();

        children.sort_by_key(|n| (Reverse(n.is_folder), Reverse(n.created_at)));
        Ok(children)
    }

    async fn insert_folder(&self, folder: FileNode) -> AppResult<FileNode> {
        match self.nodes.entry(folder.id.clone()) {
            Entry::Occupied(_) => Err(AppError::database(format!(
                "Duplicate file id {}",
                folder.id
            ))),
            Entry::Vacant(slot) => {
                debug!(
                    file_id = %folder.id,
                    parent_id = ?folder.parent_id,
                    "Folder inserted in memory"
                );
                Ok(slot.insert(folder).value().clone())
            }
        }
    }

    async fn begin_edit(&self, owner: &UserId) -> AppResult<Box<dyn TreeEdit>> {
        let guard = Arc::clone(&self.edit_lock).lock_owned().await;
        Ok(Box::new(MemoryTreeEdit {
            store: self.clone(),
            owner: owner.clone(),
            pending: HashMap::new(),
            _guard: guard,
        }))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Buffers re-parented rows until commit.
struct MemoryTreeEdit {
    store: MemoryFileStore,
    owner: UserId,
    pending: HashMap<FileId, FileNode>,
    _guard: OwnedMutexGuard<()>,
}

impl MemoryTreeEdit {
    fn visible(&self, id: &FileId) -> Option<FileNode> {
        match self.pending.get(id) {
            Some(node) => Some(node.clone()),
            None => self.store.visible(id, &self.owner),
        }
    }
}

#[async_trait]
impl TreeEdit for MemoryTreeEdit {
    async fn find_folder(&mut self, id: &FileId) -> AppResult<Option<FolderRef>> {
        Ok(self.visible(id).and_then(|node| node.as_folder_ref()))
    }

    async fn find_node(&mut self, id: &FileId) -> AppResult<Option<FileNode>> {
        Ok(self.visible(id))
    }

    async fn update_parent(
        &mut self,
        id: &FileId,
        parent: Option<&FileId>,
    ) -> AppResult<FileNode> {
        let mut node = self
            .visible(id)
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))?;

        node.parent_id = parent.cloned();
        node.updated_at = Utc::now();
        self.pending.insert(id.clone(), node.clone());

        Ok(node)
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let Self {
            store,
            owner,
            pending,
            _guard,
        } = *self;

        let rows = pending.len();
        for node in pending.into_values() {
            store.insert(node);
        }
        debug!(owner_id = %owner, rows, "Tree edit committed in memory");
        Ok(())
    }
}
