//! Error types for splitting
//!
//! Every failure of a split maps to one variant of [`SplitError`], so callers
//! can tell a missing input apart from a read, decode or write failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while splitting a file into parts
#[derive(Error, Debug)]
pub enum SplitError {
    /// The input path does not exist or is not a regular file
    #[error("file '{}' not found", path.display())]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// Opening or reading the input failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The input being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A line held bytes that are invalid in the input encoding
    #[error("invalid {encoding} sequence in {} at line {line}", path.display())]
    Decode {
        /// The input being read
        path: PathBuf,
        /// 1-based line number of the offending line
        line: usize,
        /// Name of the encoding the line was decoded with
        encoding: &'static str,
    },

    /// Creating, writing or flushing a part failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The part being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The split configuration cannot be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SplitError {
    /// Whether this error is the missing-input case
    pub fn is_not_found(&self) -> bool {
        matches!(self, SplitError::NotFound { .. })
    }

    /// The file the error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SplitError::NotFound { path }
            | SplitError::Read { path, .. }
            | SplitError::Decode { path, .. }
            | SplitError::Write { path, .. } => Some(path),
            SplitError::InvalidConfig(_) => None,
        }
    }
}

/// Result type for split operations
pub type Result<T> = std::result::Result<T, SplitError>;
