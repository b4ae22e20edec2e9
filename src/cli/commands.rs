//! CLI command implementations
//!
//! `serve` boots in a fixed order: logging, configuration, store pool,
//! HTTP listener. Any failure aborts the boot.

use std::path::Path;

use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServer;
use crate::rest_api::VotingHandler;
use crate::store;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "votetally=info,tower_http=info";

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Boot the store and serve the API until the process exits
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    info!(
        database = %config.masked_database_url(),
        port = config.http.port,
        "configuration loaded"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = store::connect(&config.database_url, config.max_connections)
            .await
            .map_err(|e| CliError::Boot(e.to_string()))?;

        let handler = VotingHandler::new(store);
        HttpServer::with_config(config.http.clone(), handler)
            .start()
            .await
            .map_err(|e| CliError::Boot(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration, password masked
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let effective = json!({
        "database_url": config.masked_database_url(),
        "max_connections": config.max_connections,
        "http": config.http,
    });

    let rendered = serde_json::to_string_pretty(&effective)
        .map_err(|e| CliError::Config(format!("Failed to render config: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
