//! CLI command implementations
//!
//! Each command loads the configuration and runs to completion. `serve` is
//! the long-running mode; `sync` and `request` exit after one unit of work.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiHandler, ApiServer};
use crate::config::ServiceConfig;
use crate::store::{apply_schema, create_pool, test_connection, SqlFlightStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_json, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    init_logging();
    sqlx::any::install_default_drivers();

    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Sync { config } => sync(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Request { config } => request(&config),
    }
}

/// Install the global tracing subscriber
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = subscriber.try_init();
}

fn build_runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Create or update the flight table and exit
///
/// Runs the schema migration once against the configured database.
pub fn sync(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    let rt = build_runtime()?;

    rt.block_on(async {
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| CliError::boot_failed(format!("Database connection failed: {}", e)))?;

        apply_schema(&pool, config.database.dialect)
            .await
            .map_err(|e| CliError::boot_failed(format!("Schema sync failed: {}", e)))
    })?;

    write_response(json!({"synced": true}))?;

    Ok(())
}

/// Start the flight API server
///
/// Boot sequence:
/// 1. Configuration load
/// 2. Connection pool and connectivity probe
/// 3. Schema sync (when sync_on_start is set)
/// 4. HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = ServiceConfig::load(config_path)?;

    if let Some(port) = port {
        config.server.port = port;
    }

    let rt = build_runtime()?;

    rt.block_on(async {
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| CliError::boot_failed(format!("Database connection failed: {}", e)))?;

        test_connection(&pool)
            .await
            .map_err(|e| CliError::boot_failed(format!("Database probe failed: {}", e)))?;

        if config.sync_on_start {
            apply_schema(&pool, config.database.dialect)
                .await
                .map_err(|e| CliError::boot_failed(format!("Schema sync failed: {}", e)))?;
        }

        let store = Arc::new(SqlFlightStore::new(pool, config.database.dialect));
        let handler = ApiHandler::new(store);
        let server = ApiServer::new(handler, config.server.clone(), config.schema_browser);

        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Execute a single request from stdin and exit
///
/// Reads one JSON envelope, runs it against the configured database and
/// prints the response. Useful for scripts and smoke checks without a
/// running server.
pub fn request(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    let request = read_request()?;
    let request_str = request.to_string();

    let rt = build_runtime()?;

    let response = rt.block_on(async {
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| CliError::boot_failed(format!("Database connection failed: {}", e)))?;

        if config.sync_on_start {
            apply_schema(&pool, config.database.dialect)
                .await
                .map_err(|e| CliError::boot_failed(format!("Schema sync failed: {}", e)))?;
        }

        let store = Arc::new(SqlFlightStore::new(pool, config.database.dialect));
        let handler = ApiHandler::new(store);

        Ok::<_, CliError>(handler.handle(&request_str).await)
    })?;

    write_json(&response.to_json())?;

    Ok(())
}
