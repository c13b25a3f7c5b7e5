//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and an appropriate exit code.

use std::fmt;
use std::io;
use std::process;

use typeahead::catalog::CatalogError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to create the catalog client
    Client(CatalogError),
    /// Terminal setup or drawing failed
    Terminal(io::Error),
    /// UI task failed
    Ui(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Client(e) => write!(f, "Failed to create catalog client: {}", e),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
            CliError::Ui(msg) => write!(f, "UI error: {}", msg),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Terminal(e)
    }
}
