//! CLI command implementations

mod compare;
mod evaluate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Evaluate(args) => evaluate::run_evaluate(args, log_level),
        Command::Compare(args) => compare::run_compare(args, log_level),
    }
}
