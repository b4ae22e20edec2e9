//! CLI-specific error types
//!
//! Every CLI error is fatal: `main` prints it and exits non-zero.

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable, malformed or invalid
    #[error("VOTETALLY_CONFIG_ERROR: {0}")]
    Config(String),

    /// Runtime, store or listener failed to come up
    #[error("VOTETALLY_BOOT_FAILED: {0}")]
    Boot(String),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "VOTETALLY_CONFIG_ERROR",
            CliError::Boot(_) => "VOTETALLY_BOOT_FAILED",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
