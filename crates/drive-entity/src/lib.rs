//! # drive-entity
//!
//! Domain entity models for CloudDrive. Row types derive `sqlx::FromRow`;
//! everything serializes with camelCase field names, which is the shape the
//! browser client consumes.

pub mod file;
pub mod folder;

pub use file::FileNode;
pub use folder::{FolderPath, FolderRef, PathSegment};
