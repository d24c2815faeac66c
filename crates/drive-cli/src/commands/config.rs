//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match args.command {
        ConfigCommand::Show => {
            let config = redacted(config);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => print_table(&config),
            }
        }
    }

    Ok(())
}

fn redacted(config: &AppConfig) -> AppConfig {
    let mut config = config.clone();
    config.database.url = mask_password(&config.database.url);
    config.auth.jwt_secret = "****".to_string();
    config
}

fn print_table(config: &AppConfig) {
    output::print_heading("server");
    output::print_kv("bind", config.server.bind_address());
    output::print_kv("request_timeout_seconds", config.server.request_timeout_seconds);
    output::print_kv("cors.allowed_origins", config.server.cors.allowed_origins.join(", "));

    output::print_heading("database");
    output::print_kv("url", &config.database.url);
    output::print_kv("max_connections", config.database.max_connections);

    output::print_heading("auth");
    output::print_kv("jwt_secret", &config.auth.jwt_secret);
    output::print_kv("issuer", config.auth.issuer.as_deref().unwrap_or("-"));
    output::print_kv("cookie_name", &config.auth.cookie_name);

    output::print_heading("folders");
    output::print_kv("max_depth", config.folders.max_depth);

    output::print_heading("logging");
    output::print_kv("level", &config.logging.level);
    output::print_kv("format", &config.logging.format);
}
