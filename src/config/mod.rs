//! CLI argument schema
//!
//! Clap derive types for the `tasar` binary.

mod cli;

pub use cli::{Cli, Command, CompareArgs, EvaluateArgs, OutputFormat};
