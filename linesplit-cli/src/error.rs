//! Error handling for the CLI application

use linesplit_core::SplitError;
use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file does not exist
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File '{path}' not found."),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SplitError> for CliError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::NotFound { path } => CliError::FileNotFound(path.display().to_string()),
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// The line shown to the user for a failed command
pub fn user_message(err: &anyhow::Error) -> String {
    if let Some(CliError::FileNotFound(_)) = err.downcast_ref::<CliError>() {
        return format!("Error: {err}");
    }
    // SplitError messages already carry their I/O cause.
    if err.downcast_ref::<SplitError>().is_some() {
        return format!("An error occurred: {err}");
    }
    format!("An error occurred: {err:#}")
}
