//! Line-count chunking of text files
//!
//! The input is read one line at a time. Lines collect in a buffer until it
//! holds `lines_per_file` entries; the buffer is then written to the next
//! part and cleared. Whatever remains at end of input becomes the last part.

use crate::{
    config::SplitConfig,
    decode::LineDecoder,
    error::{Result, SplitError},
    naming::PartNamer,
};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A part that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartInfo {
    /// 1-based position of the part
    pub index: usize,
    /// Where the part was written
    pub path: PathBuf,
    /// Number of lines in the part
    pub lines: usize,
}

/// Outcome of a completed split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// The input that was split
    pub input: PathBuf,
    /// Written parts, in index order
    pub parts: Vec<PartInfo>,
    /// Lines read from the input
    pub total_lines: usize,
    /// Lines whose invalid bytes were replaced or dropped
    pub altered_lines: usize,
}

impl SplitSummary {
    /// Number of parts written
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

/// Receives progress notifications during a split
pub trait SplitObserver {
    /// A part has been written and closed
    fn part_created(&mut self, _part: &PartInfo) {}

    /// All parts have been written. Also called when the input was empty.
    fn completed(&mut self, _summary: &SplitSummary) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SplitObserver for NoopObserver {}

/// Splits text files into numbered parts
#[derive(Debug, Clone)]
pub struct Chunker {
    config: SplitConfig,
    decoder: LineDecoder,
}

impl Chunker {
    /// Create a chunker, resolving the configured encoding
    pub fn new(config: SplitConfig) -> Result<Self> {
        let decoder = LineDecoder::new(&config.encoding, config.decode)?;
        Ok(Self { config, decoder })
    }

    /// The configuration in use
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split the file at `input`
    ///
    /// Nothing is written when the input does not exist. On a read or write
    /// failure the parts already written stay on disk.
    pub fn split<O>(&self, input: &Path, observer: &mut O) -> Result<SplitSummary>
    where
        O: SplitObserver + ?Sized,
    {
        if !input.exists() {
            return Err(SplitError::NotFound {
                path: input.to_path_buf(),
            });
        }

        let file = File::open(input).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SplitError::NotFound {
                path: input.to_path_buf(),
            },
            _ => SplitError::Read {
                path: input.to_path_buf(),
                source,
            },
        })?;

        self.split_reader(BufReader::new(file), input, observer)
    }

    /// Split lines from `reader`, naming the parts after `input`
    pub fn split_reader<R, O>(
        &self,
        mut reader: R,
        input: &Path,
        observer: &mut O,
    ) -> Result<SplitSummary>
    where
        R: BufRead,
        O: SplitObserver + ?Sized,
    {
        let namer = PartNamer::new(input, self.config.output_dir.as_deref());
        let threshold = self.config.lines_per_file.get();

        let mut buffer: Vec<String> = Vec::with_capacity(threshold.min(4096));
        let mut raw = Vec::new();
        let mut parts = Vec::new();
        let mut total_lines = 0;
        let mut altered_lines = 0;

        debug!(
            input = %input.display(),
            lines_per_file = threshold,
            encoding = self.decoder.encoding_name(),
            policy = self.decoder.policy().as_str(),
            "starting split"
        );

        loop {
            raw.clear();
            let read = reader
                .read_until(b'\n', &mut raw)
                .map_err(|source| SplitError::Read {
                    path: input.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            total_lines += 1;

            let decoded = self
                .decoder
                .decode(&raw)
                .ok_or_else(|| SplitError::Decode {
                    path: input.to_path_buf(),
                    line: total_lines,
                    encoding: self.decoder.encoding_name(),
                })?;
            if decoded.altered {
                altered_lines += 1;
                warn!(
                    line = total_lines,
                    policy = self.decoder.policy().as_str(),
                    "invalid {} input altered",
                    self.decoder.encoding_name()
                );
            }
            buffer.push(decoded.text.into_owned());

            if buffer.len() >= threshold {
                let part = self.flush(&namer, parts.len() + 1, &mut buffer, observer)?;
                parts.push(part);
            }
        }

        if !buffer.is_empty() {
            let part = self.flush(&namer, parts.len() + 1, &mut buffer, observer)?;
            parts.push(part);
        }

        let summary = SplitSummary {
            input: input.to_path_buf(),
            parts,
            total_lines,
            altered_lines,
        };

        info!(
            input = %input.display(),
            parts = summary.part_count(),
            lines = total_lines,
            "split complete"
        );
        observer.completed(&summary);

        Ok(summary)
    }

    fn flush<O>(
        &self,
        namer: &PartNamer,
        index: usize,
        buffer: &mut Vec<String>,
        observer: &mut O,
    ) -> Result<PartInfo>
    where
        O: SplitObserver + ?Sized,
    {
        if index == 1 {
            if let Some(dir) = &self.config.output_dir {
                fs::create_dir_all(dir).map_err(|source| SplitError::Write {
                    path: dir.clone(),
                    source,
                })?;
            }
        }

        let path = namer.part_path(index);
        write_part(&path, buffer)?;

        let part = PartInfo {
            index,
            path,
            lines: buffer.len(),
        };
        buffer.clear();

        debug!(index, lines = part.lines, path = %part.path.display(), "part written");
        observer.part_created(&part);

        Ok(part)
    }
}

/// Write `lines` verbatim to a freshly created (or truncated) file
fn write_part(path: &Path, lines: &[String]) -> Result<()> {
    let write_err = |source: io::Error| SplitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(())
}
