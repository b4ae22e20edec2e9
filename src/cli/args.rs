//! CLI argument definitions using clap
//!
//! Commands:
//! - votetally serve --config <path> [--port <port>]
//! - votetally check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// votetally - REST API over candidates, parties, voters and vote tallies
#[derive(Parser, Debug)]
#[command(name = "votetally")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./votetally.json")]
        config: PathBuf,

        /// Port to listen on, overriding configuration and PORT
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration and exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./votetally.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
