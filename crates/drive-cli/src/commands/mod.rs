//! CLI command definitions and dispatch.

pub mod config;
pub mod ls;
pub mod path;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_database::{DatabasePool, FileRepository, FileStore};

use crate::output::OutputFormat;

/// Environment selected when `DRIVE_ENV` is unset.
const DEFAULT_ENV: &str = "development";

/// CloudDrive: folder navigation backend
#[derive(Debug, Parser)]
#[command(name = "drive-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default + config/$DRIVE_ENV)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the CloudDrive HTTP server
    Serve(serve::ServeArgs),
    /// Print the breadcrumb path of a folder
    Path(path::PathArgs),
    /// List the contents of a folder
    Ls(ls::LsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Path(args) => path::execute(args, &config, self.format).await,
            Commands::Ls(args) => ls::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}

/// Helper: load configuration from an explicit file or the environment layout
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::load_from(path),
        None => {
            let env = std::env::var("DRIVE_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
            AppConfig::load(&env)
        }
    }
}

/// Helper: connect to PostgreSQL and wrap the pool in a node store
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn FileStore>, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(Arc::new(FileRepository::new(pool.into_pool())))
}
