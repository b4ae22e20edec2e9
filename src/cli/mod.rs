//! CLI module for votetally
//!
//! Provides command-line interface for:
//! - serve: Connect to the database and serve the REST API
//! - check-config: Print the effective configuration

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
