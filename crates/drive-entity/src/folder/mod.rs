//! Folder domain entities.

pub mod model;
pub mod path;

pub use model::FolderRef;
pub use path::{FolderPath, PathSegment};
