//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use linesplit_core::{DecodePolicy, DEFAULT_ENCODING, DEFAULT_LINES_PER_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input file used when neither the command line nor a config file names one
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default file name for `generate-config`
pub const DEFAULT_CONFIG_FILE: &str = "linesplit.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Split configuration
    #[serde(default)]
    pub split: SplitSection,
}

/// `[split]` table
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SplitSection {
    /// File to split
    pub input: PathBuf,

    /// Lines per part
    pub lines_per_file: usize,

    /// Handling of undecodable input
    pub decode: DecodePolicy,

    /// Input encoding label
    pub encoding: String,

    /// Directory for the parts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for SplitSection {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            lines_per_file: DEFAULT_LINES_PER_FILE,
            // Undecodable bytes are dropped unless the user asks otherwise.
            decode: DecodePolicy::Ignore,
            encoding: DEFAULT_ENCODING.to_string(),
            output_dir: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
