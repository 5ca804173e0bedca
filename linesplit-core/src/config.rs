//! Configuration types for splitting

use crate::error::{Result, SplitError};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Number of lines per part when nothing else is configured
pub const DEFAULT_LINES_PER_FILE: usize = 1500;

/// Encoding label assumed for input files
pub const DEFAULT_ENCODING: &str = "utf-8";

/// What to do with byte sequences that are invalid in the input encoding
///
/// Neither `Replace` nor `Ignore` is lossless: a part written under them may
/// differ from the input bytes. Only `Strict` guarantees the parts
/// concatenate back to the original file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecodePolicy {
    /// Fail the split with [`SplitError::Decode`]
    #[default]
    Strict,
    /// Substitute U+FFFD for each invalid sequence
    Replace,
    /// Drop invalid sequences from the line
    Ignore,
}

impl DecodePolicy {
    /// Lowercase name, as accepted in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodePolicy::Strict => "strict",
            DecodePolicy::Replace => "replace",
            DecodePolicy::Ignore => "ignore",
        }
    }
}

impl std::str::FromStr for DecodePolicy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(DecodePolicy::Strict),
            "replace" => Ok(DecodePolicy::Replace),
            "ignore" => Ok(DecodePolicy::Ignore),
            other => Err(SplitError::InvalidConfig(format!(
                "unknown decode policy '{other}' (expected strict, replace or ignore)"
            ))),
        }
    }
}

/// Split configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    /// Maximum number of lines in every part but the last
    pub lines_per_file: NonZeroUsize,
    /// Handling of undecodable input
    pub decode: DecodePolicy,
    /// WHATWG label of the input encoding
    pub encoding: String,
    /// Directory for the parts (None = next to the input)
    pub output_dir: Option<PathBuf>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            lines_per_file: NonZeroUsize::new(DEFAULT_LINES_PER_FILE)
                .unwrap_or(NonZeroUsize::MIN),
            decode: DecodePolicy::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            output_dir: None,
        }
    }
}

impl SplitConfig {
    /// Create a configuration with the given threshold
    pub fn new(lines_per_file: usize) -> Result<Self> {
        SplitConfigBuilder::new()
            .lines_per_file(lines_per_file)
            .build()
    }

    /// Start building a configuration
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::new()
    }
}

/// Builder for [`SplitConfig`]
#[derive(Debug)]
pub struct SplitConfigBuilder {
    lines_per_file: usize,
    decode: DecodePolicy,
    encoding: String,
    output_dir: Option<PathBuf>,
}

impl Default for SplitConfigBuilder {
    fn default() -> Self {
        Self {
            lines_per_file: DEFAULT_LINES_PER_FILE,
            decode: DecodePolicy::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            output_dir: None,
        }
    }
}

impl SplitConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line threshold
    pub fn lines_per_file(mut self, lines: usize) -> Self {
        self.lines_per_file = lines;
        self
    }

    /// Set the decode policy
    pub fn decode(mut self, policy: DecodePolicy) -> Self {
        self.decode = policy;
        self
    }

    /// Set the input encoding label
    pub fn encoding<S: Into<String>>(mut self, label: S) -> Self {
        self.encoding = label.into();
        self
    }

    /// Write parts into `dir` instead of next to the input
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: Option<P>) -> Self {
        self.output_dir = dir.map(Into::into);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SplitConfig> {
        let lines_per_file = NonZeroUsize::new(self.lines_per_file).ok_or_else(|| {
            SplitError::InvalidConfig("lines_per_file must be at least 1".to_string())
        })?;

        if self.encoding.trim().is_empty() {
            return Err(SplitError::InvalidConfig(
                "encoding label must not be empty".to_string(),
            ));
        }

        Ok(SplitConfig {
            lines_per_file,
            decode: self.decode,
            encoding: self.encoding,
            output_dir: self.output_dir,
        })
    }
}
