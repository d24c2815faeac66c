//! Folder listing.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_core::types::{FileId, UserId};
use drive_entity::file::FileNode;
use drive_service::context::RequestContext;
use drive_service::file::FileService;
use drive_service::folder::PathResolver;

use crate::output::{self, OutputFormat};

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Owner whose drive is listed
    #[arg(short, long)]
    pub owner: String,

    /// Folder to list (omit for the drive root)
    #[arg(long)]
    pub parent: Option<String>,
}

/// Listing display row
#[derive(Debug, Serialize, Tabled)]
struct NodeRow {
    id: String,
    name: String,
    kind: String,
    size: String,
    updated_at: String,
}

impl From<FileNode> for NodeRow {
    fn from(node: FileNode) -> Self {
        let kind = if node.is_folder {
            "folder".to_string()
        } else {
            node.mime_type.unwrap_or_else(|| "file".to_string())
        };

        Self {
            id: node.id.into_inner(),
            name: node.name,
            kind,
            size: node.size.map(|s| s.to_string()).unwrap_or_default(),
            updated_at: node.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute the ls command
pub async fn execute(
    args: &LsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = super::open_store(config).await?;
    let resolver = Arc::new(PathResolver::new(Arc::clone(&store), &config.folders));
    let service = FileService::new(store, resolver);

    let ctx = RequestContext::new(UserId::from(args.owner.as_str()), None);
    let parent = args
        .parent
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(FileId::from);

    let files = service.list_children(&ctx, parent.as_ref()).await?;

    match format {
        OutputFormat::Json => output::print_json(&files),
        OutputFormat::Table => {
            let rows: Vec<NodeRow> = files.into_iter().map(NodeRow::from).collect();
            output::print_list(&rows, format, "Folder is empty.");
        }
    }

    Ok(())
}
