//! # drive-service
//!
//! Business logic service layer for CloudDrive.
//!
//! The node store is handed to each service as an `Arc<dyn FileStore>` at
//! construction time.

pub mod context;
pub mod file;
pub mod folder;

pub use context::RequestContext;
pub use file::FileService;
pub use folder::{AncestorWalk, FolderLookup, PathResolver, WalkStop};
