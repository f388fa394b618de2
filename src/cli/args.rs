//! CLI argument definitions using clap
//!
//! Commands:
//! - flightdb sync --config <path>
//! - flightdb serve --config <path> [--port <port>]
//! - flightdb request --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flightdb - A small, self-hostable flight records service
#[derive(Parser, Debug)]
#[command(name = "flightdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create or update the flight table and exit
    Sync {
        /// Path to configuration file
        #[arg(long, default_value = "./flightdb.json")]
        config: PathBuf,
    },

    /// Start the flight API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./flightdb.json")]
        config: PathBuf,

        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute a single request from stdin and exit
    Request {
        /// Path to configuration file
        #[arg(long, default_value = "./flightdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
