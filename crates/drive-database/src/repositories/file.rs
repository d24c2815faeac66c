//! Node repository on the `files` table.

use async_trait::async_trait;
use sqlx::{Executor, PgPool, Postgres, Transaction};
use tracing::debug;

use drive_core::error::{AppError, ErrorKind};
use drive_core::result::AppResult;
use drive_core::types::{FileId, UserId};
use drive_entity::file::FileNode;
use drive_entity::folder::FolderRef;

use crate::store::{FileStore, TreeEdit};

/// Columns selected for a full [`FileNode`] row.
const NODE_COLUMNS: &str = "id, user_id, parent_id, name, mime_type, size, is_folder, \
                            created_at, updated_at, deleted_at";

/// PostgreSQL-backed [`FileStore`].
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn select_folder<'e, E>(
    executor: E,
    id: &FileId,
    owner: &UserId,
) -> AppResult<Option<FolderRef>>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, FolderRef>(
        "SELECT id, name, parent_id FROM files \
         WHERE id = $1 AND user_id = $2 AND is_folder = TRUE AND deleted_at IS NULL",
    )
    .bind(id)
    .bind(owner)
    .fetch_optional(executor)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
}

async fn select_node<'e, E>(
    executor: E,
    id: &FileId,
    owner: &UserId,
) -> AppResult<Option<FileNode>>
where
    E: Executor<'e, Database = Postgres>,
{
    let sql = format!(
        "SELECT {NODE_COLUMNS} FROM files \
         WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL"
    );
    sqlx::query_as::<_, FileNode>(&sql)
        .bind(id)
        .bind(owner)
        .fetch_optional(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_folder(&self, id: &FileId, owner: &UserId) -> AppResult<Option<FolderRef>> {
        select_folder(&self.pool, id, owner).await
    }

    async fn find_node(&self, id: &FileId, owner: &UserId) -> AppResult<Option<FileNode>> {
        select_node(&self.pool, id, owner).await
    }

    async fn list_children(
        &self,
        parent: Option<&FileId>,
        owner: &UserId,
    ) -> AppResult<Vec<FileNode>> {
        let sql = format!(
            "SELECT {NODE_COLUMNS} FROM files \
             WHERE user_id = $1 AND parent_id IS NOT DISTINCT FROM $2 AND deleted_at IS NULL \
             ORDER BY is_folder DESC, created_at DESC"
        );
        sqlx::query_as::<_, FileNode>(&sql)
            .bind(owner)
            .bind(parent)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn insert_folder(&self, folder: FileNode) -> AppResult<FileNode> {
        let sql = format!(
            "INSERT INTO files (id, user_id, parent_id, name, mime_type, size, is_folder, \
                                created_at, updated_at) \
             VALUES ($1, $2, $3, $4, NULL, NULL, TRUE, $5, $6) \
             RETURNING {NODE_COLUMNS}"
        );
        sqlx::query_as::<_, FileNode>(&sql)
            .bind(&folder.id)
            .bind(&folder.user_id)
            .bind(&folder.parent_id)
            .bind(&folder.name)
            .bind(folder.created_at)
            .bind(folder.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    async fn begin_edit(&self, owner: &UserId) -> AppResult<Box<dyn TreeEdit>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin edit", e))?;

        // Serializes edits of one owner's tree until the transaction ends.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(owner)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock tree", e))?;

        debug!(owner_id = %owner, "Tree edit started");
        Ok(Box::new(PgTreeEdit {
            tx,
            owner: owner.clone(),
        }))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

/// A transaction holding the owner's advisory lock. Rolled back on drop.
struct PgTreeEdit {
    tx: Transaction<'static, Postgres>,
    owner: UserId,
}

#[async_trait]
impl TreeEdit for PgTreeEdit {
    async fn find_folder(&mut self, id: &FileId) -> AppResult<Option<FolderRef>> {
        select_folder(&mut *self.tx, id, &self.owner).await
    }

    async fn find_node(&mut self, id: &FileId) -> AppResult<Option<FileNode>> {
        select_node(&mut *self.tx, id, &self.owner).await
    }

    async fn update_parent(
        &mut self,
        id: &FileId,
        parent: Option<&FileId>,
    ) -> AppResult<FileNode> {
        let sql = format!(
            "UPDATE files SET parent_id = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL \
             RETURNING {NODE_COLUMNS}"
        );
        sqlx::query_as::<_, FileNode>(&sql)
            .bind(id)
            .bind(&self.owner)
            .bind(parent)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move file", e))?
            .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit edit", e))
    }
}
