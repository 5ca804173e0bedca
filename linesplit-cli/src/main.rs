//! linesplit command-line entry point

use clap::Parser;
use linesplit_cli::commands::Commands;
use linesplit_cli::error::user_message;
use std::process::ExitCode;

/// Split text files into numbered parts of a fixed maximum line count
#[derive(Debug, Parser)]
#[command(name = "linesplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", user_message(&err));
            ExitCode::FAILURE
        }
    }
}
