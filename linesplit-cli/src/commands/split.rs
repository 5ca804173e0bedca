//! Split command implementation

use crate::config::{CliConfig, SplitSection};
use crate::error::CliError;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use linesplit_core::{Chunker, DecodePolicy, SplitConfig, SplitError};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// File to split (default: from config, else input.txt)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Maximum lines per part (default: 1500)
    #[arg(short = 'n', long, value_name = "N")]
    pub lines: Option<usize>,

    /// What to do with bytes that are invalid in the input encoding
    #[arg(short, long, value_enum)]
    pub decode: Option<DecodeArg>,

    /// Input encoding label (utf-8, latin1, shift_jis, ...)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Directory for the parts (default: next to the input)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LINESPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Decode policies accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DecodeArg {
    /// Fail on the first invalid line
    Strict,
    /// Replace invalid bytes with U+FFFD
    Replace,
    /// Drop invalid bytes
    Ignore,
}

impl From<DecodeArg> for DecodePolicy {
    fn from(arg: DecodeArg) -> Self {
        match arg {
            DecodeArg::Strict => DecodePolicy::Strict,
            DecodeArg::Replace => DecodePolicy::Replace,
            DecodeArg::Ignore => DecodePolicy::Ignore,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::load(path)?
            }
            None => CliConfig::default(),
        };
        let (input, config) = self.resolve(file_config.split)?;

        let chunker = Chunker::new(config).map_err(CliError::from)?;
        let mut reporter = ProgressReporter::stdout(self.quiet);
        reporter.start(&input);

        match chunker.split(&input, &mut reporter) {
            Ok(summary) => {
                log::info!(
                    "Split {} lines from {} into {} part(s)",
                    summary.total_lines,
                    input.display(),
                    summary.part_count()
                );
                Ok(())
            }
            Err(err) => {
                reporter.abandon();
                match err {
                    SplitError::NotFound { .. } | SplitError::InvalidConfig(_) => {
                        Err(CliError::from(err).into())
                    }
                    other => Err(other.into()),
                }
            }
        }
    }

    /// Merge command-line flags over the config file section
    fn resolve(&self, section: SplitSection) -> Result<(PathBuf, SplitConfig)> {
        let input = self.input.clone().unwrap_or(section.input);
        let decode = self.decode.map(DecodePolicy::from).unwrap_or(section.decode);

        let config = SplitConfig::builder()
            .lines_per_file(self.lines.unwrap_or(section.lines_per_file))
            .decode(decode)
            .encoding(self.encoding.clone().unwrap_or(section.encoding))
            .output_dir(self.output_dir.clone().or(section.output_dir))
            .build()
            .map_err(CliError::from)?;

        Ok((input, config))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let result = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
            if let Err(err) = result {
                log::debug!("Logger already initialized: {err}");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Option<PathBuf>) -> SplitArgs {
        SplitArgs {
            input,
            lines: None,
            decode: None,
            encoding: None,
            output_dir: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let (input, config) = args(None).resolve(SplitSection::default()).unwrap();

        assert_eq!(input, PathBuf::from("input.txt"));
        assert_eq!(config.lines_per_file.get(), 1500);
        assert_eq!(config.decode, DecodePolicy::Ignore);
        assert_eq!(config.encoding, "utf-8");
    }

    #[test]
    fn test_flags_override_config_file() {
        let section = SplitSection {
            input: PathBuf::from("from_config.txt"),
            lines_per_file: 100,
            decode: DecodePolicy::Replace,
            encoding: "latin1".to_string(),
            output_dir: Some(PathBuf::from("config_out")),
        };
        let mut cli = args(Some(PathBuf::from("from_flag.txt")));
        cli.lines = Some(7);
        cli.decode = Some(DecodeArg::Strict);

        let (input, config) = cli.resolve(section).unwrap();

        assert_eq!(input, PathBuf::from("from_flag.txt"));
        assert_eq!(config.lines_per_file.get(), 7);
        assert_eq!(config.decode, DecodePolicy::Strict);
        // Not given on the command line, so the config file wins
        assert_eq!(config.encoding, "latin1");
        assert_eq!(config.output_dir, Some(PathBuf::from("config_out")));
    }

    #[test]
    fn test_zero_lines_is_config_error() {
        let mut cli = args(None);
        cli.lines = Some(0);

        let err = cli.resolve(SplitSection::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_execute_writes_parts() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("log.txt");
        fs::write(&input, "a\nb\nc\n").unwrap();

        let mut cli = args(Some(input));
        cli.lines = Some(2);
        cli.execute().unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("log_part_1.txt")).unwrap(),
            "a\nb\n"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("log_part_2.txt")).unwrap(),
            "c\n"
        );
    }

    #[test]
    fn test_execute_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let cli = args(Some(temp_dir.path().join("missing.txt")));

        let err = cli.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_decode_arg_conversion() {
        assert_eq!(DecodePolicy::from(DecodeArg::Strict), DecodePolicy::Strict);
        assert_eq!(DecodePolicy::from(DecodeArg::Replace), DecodePolicy::Replace);
        assert_eq!(DecodePolicy::from(DecodeArg::Ignore), DecodePolicy::Ignore);
    }
}
