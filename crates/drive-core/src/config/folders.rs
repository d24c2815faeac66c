//! Folder traversal configuration.

use serde::{Deserialize, Serialize};

/// Limits applied when walking a folder's parent chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConfig {
    /// Maximum number of ancestors a single walk may visit.
    ///
    /// A walk that still has a parent to follow after this many steps stops
    /// there, which also bounds walks over corrupted (cyclic) parent links.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> usize {
    64
}
