//! linesplit CLI library
//!
//! This library provides the command-line interface for splitting text
//! files into numbered parts.

pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

pub use error::{CliError, CliResult};
