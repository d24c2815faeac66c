//! Breadcrumb path resolution.
//!
//! A folder's path is rebuilt on every request by following `parent_id`
//! links upward, one owner-scoped lookup per level. A lookup that comes back
//! empty ends the walk quietly: whatever was collected below that point is
//! the answer. The walk is bounded by `folders.max_depth` so that corrupted
//! parent links cannot keep a request spinning.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use drive_core::config::FolderConfig;
use drive_core::result::AppResult;
use drive_core::types::{FileId, UserId};
use drive_database::store::{FileStore, TreeEdit};
use drive_entity::folder::{FolderPath, FolderRef, PathSegment};

/// One owner-scoped folder lookup per step of a walk.
#[async_trait]
pub trait FolderLookup: Send {
    async fn folder(&mut self, id: &FileId) -> AppResult<Option<FolderRef>>;
}

/// Reads straight from the store, outside any edit.
struct StoreLookup<'a> {
    store: &'a dyn FileStore,
    owner: &'a UserId,
}

#[async_trait]
impl FolderLookup for StoreLookup<'_> {
    async fn folder(&mut self, id: &FileId) -> AppResult<Option<FolderRef>> {
        self.store.find_folder(id, self.owner).await
    }
}

#[async_trait]
impl FolderLookup for Box<dyn TreeEdit> {
    async fn folder(&mut self, id: &FileId) -> AppResult<Option<FolderRef>> {
        self.find_folder(id).await
    }
}

/// Why an ancestor walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStop {
    /// The last folder visited has no parent.
    ReachedRoot,
    /// A folder in the chain is missing, trashed, not a folder, or owned by
    /// someone else.
    LookupMiss,
    /// The depth limit was hit while there was still a parent to follow.
    DepthLimit,
}

/// The result of walking up from a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorWalk {
    /// Visited folders, root-first.
    pub segments: FolderPath,
    /// Why the walk ended.
    pub stop: WalkStop,
}

impl AncestorWalk {
    /// Whether `id` appears anywhere in the visited chain.
    pub fn contains(&self, id: &FileId) -> bool {
        self.segments.iter().any(|s| &s.id == id)
    }
}

/// Resolves a folder id into its root-first breadcrumb path.
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Node store.
    store: Arc<dyn FileStore>,
    /// Maximum number of folders a single walk may visit.
    max_depth: usize,
}

impl PathResolver {
    /// Creates a new resolver.
    pub fn new(store: Arc<dyn FileStore>, config: &FolderConfig) -> Self {
        Self {
            store,
            max_depth: config.max_depth,
        }
    }

    /// The configured depth limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the breadcrumb path for `folder_id`, root-first.
    ///
    /// `None` means the drive root and yields an empty path without touching
    /// the store. Missing, trashed, or foreign folders truncate the path
    /// instead of failing; only store errors are returned as `Err`.
    pub async fn resolve_path(
        &self,
        folder_id: Option<&FileId>,
        owner: &UserId,
    ) -> AppResult<FolderPath> {
        let Some(folder_id) = folder_id else {
            return Ok(FolderPath::new());
        };

        let walk = self.walk(folder_id, owner).await?;

        if walk.stop == WalkStop::DepthLimit {
            warn!(
                folder_id = %folder_id,
                owner_id = %owner,
                max_depth = self.max_depth,
                "Folder path exceeds depth limit, returning partial path"
            );
        }

        Ok(walk.segments)
    }

    /// Walks from `start` towards the root and reports why it stopped.
    ///
    /// Lookups run one after another; each needs the previous folder's
    /// parent id.
    pub async fn walk(&self, start: &FileId, owner: &UserId) -> AppResult<AncestorWalk> {
        let mut lookup = StoreLookup {
            store: self.store.as_ref(),
            owner,
        };
        self.walk_with(&mut lookup, start).await
    }

    /// [`PathResolver::walk`] over any lookup, such as an open [`TreeEdit`].
    pub async fn walk_with<L>(&self, lookup: &mut L, start: &FileId) -> AppResult<AncestorWalk>
    where
        L: FolderLookup + ?Sized,
    {
        let mut segments: Vec<PathSegment> = Vec::new();
        let mut current = Some(start.clone());
        let mut stop = WalkStop::ReachedRoot;

        while let Some(id) = current.take() {
            if segments.len() >= self.max_depth {
                stop = WalkStop::DepthLimit;
                break;
            }

            match lookup.folder(&id).await? {
                Some(folder) => {
                    current = folder.parent_id.clone();
                    segments.push(PathSegment::from(folder));
                }
                None => {
                    stop = WalkStop::LookupMiss;
                    break;
                }
            }
        }

        segments.reverse();

        debug!(
            start = %start,
            depth = segments.len(),
            stop = ?stop,
            "Folder walk finished"
        );

        Ok(AncestorWalk { segments, stop })
    }
}
