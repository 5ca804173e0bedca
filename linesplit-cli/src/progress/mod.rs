//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use linesplit_core::{PartInfo, SplitObserver, SplitSummary};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Console reporter for a split
///
/// Prints one `Created:` line per part and a completion line to `writer`.
/// While the split runs a spinner is drawn on stderr; indicatif hides it
/// when stderr is not a terminal.
pub struct ProgressReporter<W: Write> {
    writer: W,
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter<io::Stdout> {
    /// Create a reporter that writes to stdout
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> ProgressReporter<W> {
    /// Create a new progress reporter
    pub fn new(writer: W, quiet: bool) -> Self {
        Self {
            writer,
            spinner: None,
            quiet,
        }
    }

    /// Start the spinner for `input`
    pub fn start(&mut self, input: &Path) {
        if self.quiet {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} [{elapsed}] {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Splitting {}", input.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(spinner);
    }

    /// Stop the spinner after a failure
    pub fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Consume the reporter, returning its writer
    pub fn into_inner(mut self) -> W {
        self.abandon();
        self.writer
    }

    fn print(&mut self, line: fmt::Arguments<'_>) {
        if self.quiet {
            return;
        }

        let writer = &mut self.writer;
        let result = match &self.spinner {
            Some(spinner) => spinner.suspend(|| writeln!(writer, "{line}")),
            None => writeln!(writer, "{line}"),
        };

        if let Err(err) = result {
            log::warn!("Failed to write progress output: {err}");
        }
    }
}

impl<W: Write> SplitObserver for ProgressReporter<W> {
    fn part_created(&mut self, part: &PartInfo) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format!("Wrote part {} ({} lines)", part.index, part.lines));
        }
        self.print(format_args!("Created: {}", part.path.display()));
    }

    fn completed(&mut self, summary: &SplitSummary) {
        self.abandon();
        self.print(format_args!(
            "File splitting complete. {} part(s) written.",
            summary.part_count()
        ));
        if summary.altered_lines > 0 {
            log::warn!(
                "{} line(s) contained undecodable bytes and were altered",
                summary.altered_lines
            );
        }
    }
}
