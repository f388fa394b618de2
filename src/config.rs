//! Service configuration.
//!
//! Loaded from a JSON file (default `./flightdb.json`). Every field except
//! the database name has a default, so a minimal config is just:
//!
//! ```json
//! {"database": {"database": "flight_db"}}
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("{0}")]
    Invalid(String),
}

/// Database dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[serde(rename = "postgresql")]
    PostgreSQL,
    #[serde(rename = "mysql")]
    MySQL,
    #[serde(rename = "sqlite")]
    SQLite,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::PostgreSQL => write!(f, "postgresql"),
            Dialect::MySQL => write!(f, "mysql"),
            Dialect::SQLite => write!(f, "sqlite"),
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Dialect (default: "mysql")
    #[serde(default = "default_dialect")]
    pub dialect: Dialect,

    /// Host name, ignored for SQLite (default: "localhost")
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Port number (default: 3306)
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// User name
    #[serde(default)]
    pub user: Option<String>,

    /// Password
    #[serde(default)]
    pub password: Option<String>,

    /// Database name; for SQLite this is the database file path (required)
    pub database: String,

    /// Pool acquire timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
}

fn default_dialect() -> Dialect {
    Dialect::MySQL
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    3306
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.is_empty() {
            return Err(ConfigError::Invalid(
                "Database name is not specified".to_string(),
            ));
        }

        if self.dialect != Dialect::SQLite && self.host.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "Database host is required for dialect '{}'",
                self.dialect
            )));
        }

        Ok(())
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Database connection settings (required)
    pub database: DatabaseConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Apply the flight table schema once at serve startup (default: true)
    #[serde(default = "default_true")]
    pub sync_on_start: bool,

    /// Expose the operation catalog at GET /schema (default: true)
    #[serde(default = "default_true")]
    pub schema_browser: bool,
}

fn default_true() -> bool {
    true
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()
    }
}
