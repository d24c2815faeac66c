//! Breadcrumb path lookup.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_core::types::{FileId, UserId};
use drive_service::folder::PathResolver;

use crate::output::{self, OutputFormat};

/// Arguments for the path command
#[derive(Debug, Args)]
pub struct PathArgs {
    /// Owner whose drive is walked
    #[arg(short, long)]
    pub owner: String,

    /// Folder to resolve (omit for the drive root)
    #[arg(long)]
    pub folder: Option<String>,
}

/// Path display row
#[derive(Debug, Serialize, Tabled)]
struct PathRow {
    /// Depth below the root, starting at 1
    depth: usize,
    /// Folder ID
    id: String,
    /// Name
    name: String,
}

/// Execute the path command
pub async fn execute(
    args: &PathArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let resolver = PathResolver::new(store, &config.folders);

    let owner = UserId::from(args.owner.as_str());
    let folder = args
        .folder
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(FileId::from);

    let path = resolver.resolve_path(folder.as_ref(), &owner).await?;

    let rows: Vec<PathRow> = path
        .into_iter()
        .enumerate()
        .map(|(i, segment)| PathRow {
            depth: i + 1,
            id: segment.id.into_inner(),
            name: segment.name,
        })
        .collect();

    output::print_list(&rows, format, "/ (drive root)");
    Ok(())
}
