//! Start the CloudDrive server.

use clap::Args;

use drive_core::config::AppConfig;
use drive_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting CloudDrive server"
    );

    let store = super::open_store(&config).await?;
    drive_api::run_server(config, store).await
}
