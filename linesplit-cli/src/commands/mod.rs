//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod generate_config;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a text file into numbered parts
    Split(split::SplitArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_split_with_flags() {
        let cli = TestCli::try_parse_from([
            "linesplit", "split", "big.log", "-n", "200", "--decode", "replace", "-o", "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.input, Some(PathBuf::from("big.log")));
                assert_eq!(args.lines, Some(200));
                assert_eq!(args.decode, Some(split::DecodeArg::Replace));
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
                assert!(!args.quiet);
            }
            Commands::GenerateConfig(_) => panic!("Should be Split"),
        }
    }

    #[test]
    fn test_parse_split_without_input() {
        let cli = TestCli::try_parse_from(["linesplit", "split"]).unwrap();

        match cli.command {
            Commands::Split(args) => {
                assert!(args.input.is_none());
                assert!(args.lines.is_none());
            }
            Commands::GenerateConfig(_) => panic!("Should be Split"),
        }
    }

    #[test]
    fn test_parse_verbosity_count() {
        let cli = TestCli::try_parse_from(["linesplit", "split", "-vvv"]).unwrap();

        match cli.command {
            Commands::Split(args) => assert_eq!(args.verbose, 3),
            Commands::GenerateConfig(_) => panic!("Should be Split"),
        }
    }

    #[test]
    fn test_parse_generate_config_default_output() {
        let cli = TestCli::try_parse_from(["linesplit", "generate-config"]).unwrap();

        match cli.command {
            Commands::GenerateConfig(args) => {
                assert_eq!(args.output, PathBuf::from("linesplit.toml"));
                assert!(!args.force);
            }
            Commands::Split(_) => panic!("Should be GenerateConfig"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_lines() {
        assert!(TestCli::try_parse_from(["linesplit", "split", "-n", "many"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_decode_policy() {
        assert!(TestCli::try_parse_from(["linesplit", "split", "--decode", "lossy"]).is_err());
    }
}
