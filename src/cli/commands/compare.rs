//! Compare command implementation
//!
//! Runs one evaluation per prediction file and renders a wide table: one row
//! per metric, one column group per run with per-segment sub-columns. Purely
//! a reformatting of repeated evaluations; each run is independent.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::CompareArgs;
use crate::dataset::{self, EmailRecord};
use crate::eval::{evaluate, EvalConfig, EvaluationReport};
use std::path::Path;

const METRIC_WIDTH: usize = 11;
const COLUMN_WIDTH: usize = 15;

pub fn run_compare(args: CompareArgs, log_level: LogLevel) -> Result<(), String> {
    let truth = dataset::load_truth(&args.truth)
        .map_err(|e| format!("Failed to load ground truth: {e}"))?;

    let config = EvalConfig {
        boundary: args.boundary,
        ..EvalConfig::default()
    };

    // A run that fails to load or evaluate gets a warning and an N/A column
    // group; the rest of the sweep proceeds.
    let mut runs: Vec<(String, Option<EvaluationReport>)> = Vec::new();
    for path in &args.predictions {
        match evaluate_run(&truth, path, &config) {
            Ok(report) => runs.push((run_label(path), Some(report))),
            Err(e) => {
                eprintln!("Warning: skipping {}: {e}", path.display());
                runs.push((run_label(path), None));
            }
        }
    }

    log(log_level, LogLevel::Normal, &render_table(&config, &runs));
    Ok(())
}

fn evaluate_run(
    truth: &[EmailRecord],
    path: &Path,
    config: &EvalConfig,
) -> Result<EvaluationReport, String> {
    let predictions = dataset::load_predictions(path).map_err(|e| e.to_string())?;
    let (examples, _warnings) = dataset::merge(truth, &predictions).map_err(|e| e.to_string())?;
    evaluate(&examples, config).map_err(|e| e.to_string())
}

fn run_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render_table(config: &EvalConfig, runs: &[(String, Option<EvaluationReport>)]) -> String {
    let group_width = COLUMN_WIDTH * 3;
    let total_width = METRIC_WIDTH + 1 + runs.len() * (group_width + 2);
    let mut table = String::new();

    table.push_str("COMPREHENSIVE EVALUATION RESULTS:\n\n");

    // Run-name header row
    table.push_str(&format!("{:<width$} ", "", width = METRIC_WIDTH));
    for (label, _) in runs {
        table.push_str(&format!(
            "{:<width$}  ",
            truncate(label, group_width),
            width = group_width
        ));
    }
    table.push('\n');

    // Segment sub-header row
    table.push_str(&format!("{:<width$} ", "Metric", width = METRIC_WIDTH));
    for _ in runs {
        table.push_str(&format!(
            "{:<w$}{:<w$}{:<w$}  ",
            config.first_name,
            config.second_name,
            config.whole_name,
            w = COLUMN_WIDTH
        ));
    }
    table.push('\n');
    table.push_str(&"-".repeat(total_width));
    table.push('\n');

    // One row per metric, three cells per run
    let metric_names = ["Precision", "Recall", "F1", "Jaccard", "Accuracy"];
    for (row, name) in metric_names.iter().enumerate() {
        table.push_str(&format!("{name:<width$} ", width = METRIC_WIDTH));
        for (_, report) in runs {
            match report {
                Some(report) => {
                    let cells = [
                        report.first_segment.per_example.named()[row].1,
                        report.second_segment.per_example.named()[row].1,
                        report.whole_dataset.per_example.named()[row].1,
                    ];
                    for value in cells {
                        table.push_str(&format!("{value:<w$.2}", w = COLUMN_WIDTH));
                    }
                }
                None => {
                    for _ in 0..3 {
                        table.push_str(&format!("{:<w$}", "N/A", w = COLUMN_WIDTH));
                    }
                }
            }
            table.push_str("  ");
        }
        table.push('\n');
    }

    table
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
