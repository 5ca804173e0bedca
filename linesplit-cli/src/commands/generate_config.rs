//! Generate config command implementation

use crate::config::DEFAULT_CONFIG_FILE;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!("Use it with:");
        println!("   linesplit split --config {}", self.output.display());

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# linesplit configuration

[split]
# File to split when none is given on the command line
input = "input.txt"

# Maximum number of lines in each part; the last part may hold fewer
lines_per_file = 1500

# Bytes that are invalid in the input encoding:
#   strict  - stop with an error naming the line
#   replace - substitute U+FFFD
#   ignore  - drop them (the parts no longer match the input byte for byte)
decode = "ignore"

# WHATWG encoding label of the input; parts are always written as UTF-8
encoding = "utf-8"

# Directory for the parts; defaults to the input's directory
# output_dir = "parts"
"#
    }
}
