//! Tasar CLI
//!
//! Evaluation entry point for the tasar library.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate one prediction run
//! tasar evaluate emails.json predictions.json
//!
//! # Evaluate with a custom segment boundary and JSON output
//! tasar evaluate emails.json predictions.json --boundary 65 --format json
//!
//! # Compare several experiment runs side by side
//! tasar compare emails.json zero_shot.json five_shot.json eight_shot.json
//! ```

use clap::Parser;
use std::process::ExitCode;
use tasar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
