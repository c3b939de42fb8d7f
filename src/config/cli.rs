//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tasar: classification evaluation engine
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tasar")]
#[command(version)]
#[command(about = "Score predicted label assignments against ground truth")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate one prediction run against ground truth
    Evaluate(EvaluateArgs),

    /// Compare several prediction runs side by side
    Compare(CompareArgs),
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Path to the ground-truth JSON file
    #[arg(value_name = "TRUTH")]
    pub truth: PathBuf,

    /// Path to the predictions JSON file
    #[arg(value_name = "PREDICTIONS")]
    pub predictions: PathBuf,

    /// Index where the multi-label block ends and the single-label block begins
    #[arg(short, long, default_value = "65")]
    pub boundary: usize,

    /// Number of ranked confusion pairs to show
    #[arg(long, default_value = "5")]
    pub top: usize,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the compare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CompareArgs {
    /// Path to the ground-truth JSON file
    #[arg(value_name = "TRUTH")]
    pub truth: PathBuf,

    /// Prediction JSON files, one per experiment run
    #[arg(value_name = "PREDICTIONS", num_args = 1..)]
    pub predictions: Vec<PathBuf>,

    /// Index where the multi-label block ends and the single-label block begins
    #[arg(short, long, default_value = "65")]
    pub boundary: usize,
}

/// Output format for the evaluate command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::str::FromStr;

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::parse_from([
            "tasar",
            "evaluate",
            "emails.json",
            "predictions.json",
            "--boundary",
            "2",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Evaluate(args) => {
                assert_eq!(args.boundary, 2);
                assert_eq!(args.top, 5);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected evaluate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_compare_multiple_runs() {
        let cli = Cli::parse_from([
            "tasar",
            "compare",
            "emails.json",
            "run_a.json",
            "run_b.json",
            "run_c.json",
        ]);
        match cli.command {
            Command::Compare(args) => {
                assert_eq!(args.predictions.len(), 3);
                assert_eq!(args.boundary, 65);
            }
            other => panic!("expected compare, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tasar", "evaluate", "t.json", "p.json", "--quiet"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }
}
