//! Split text files into numbered parts of a fixed maximum line count
//!
//! ```no_run
//! use linesplit_core::{Chunker, NoopObserver, SplitConfig};
//! use std::path::Path;
//!
//! let chunker = Chunker::new(SplitConfig::new(1500)?)?;
//! let summary = chunker.split(Path::new("server.log"), &mut NoopObserver)?;
//! for part in &summary.parts {
//!     println!("{} ({} lines)", part.path.display(), part.lines);
//! }
//! # Ok::<(), linesplit_core::SplitError>(())
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod decode;
pub mod error;
pub mod naming;

// Re-export key types
pub use chunker::{Chunker, NoopObserver, PartInfo, SplitObserver, SplitSummary};
pub use config::{
    DecodePolicy, SplitConfig, SplitConfigBuilder, DEFAULT_ENCODING, DEFAULT_LINES_PER_FILE,
};
pub use decode::LineDecoder;
pub use error::{Result, SplitError};
pub use naming::PartNamer;

use std::path::Path;

/// Split `input` into parts of at most `lines_per_file` lines using the
/// default configuration otherwise
pub fn split<P: AsRef<Path>>(input: P, lines_per_file: usize) -> Result<SplitSummary> {
    let chunker = Chunker::new(SplitConfig::new(lines_per_file)?)?;
    chunker.split(input.as_ref(), &mut NoopObserver)
}
