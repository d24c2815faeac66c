//! Folder hierarchy services.

pub mod path;

pub use path::{AncestorWalk, FolderLookup, PathResolver, WalkStop};
