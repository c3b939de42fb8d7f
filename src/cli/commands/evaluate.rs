//! Evaluate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{EvaluateArgs, OutputFormat};
use crate::dataset;
use crate::eval::{evaluate, EvalConfig};

pub fn run_evaluate(args: EvaluateArgs, log_level: LogLevel) -> Result<(), String> {
    let truth = dataset::load_truth(&args.truth)
        .map_err(|e| format!("Failed to load ground truth: {e}"))?;
    let predictions = dataset::load_predictions(&args.predictions)
        .map_err(|e| format!("Failed to load predictions: {e}"))?;

    let (examples, warnings) =
        dataset::merge(&truth, &predictions).map_err(|e| e.to_string())?;

    if warnings.missing_truth > 0 {
        eprintln!(
            "Warning: {} record(s) missing ground-truth labels",
            warnings.missing_truth
        );
    }
    if warnings.missing_predictions > 0 {
        eprintln!(
            "Warning: {} record(s) missing predicted labels",
            warnings.missing_predictions
        );
    }

    log(
        log_level,
        LogLevel::Verbose,
        &format!(
            "Evaluating {} examples, boundary at {}",
            examples.len(),
            args.boundary
        ),
    );

    let config = EvalConfig {
        boundary: args.boundary,
        top_confusions: args.top,
        ..EvalConfig::default()
    };
    let report = evaluate(&examples, &config).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text => {
            log(log_level, LogLevel::Normal, &format!("{report}"));
        }
    }

    Ok(())
}
