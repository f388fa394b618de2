//! CLI module for flightdb
//!
//! Provides command-line interface for:
//! - sync: Create or update the flight table
//! - serve: Boot the service and run the HTTP API
//! - request: One-shot request execution

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{request, run, run_command, serve, sync};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_json, write_response};
