//! Property tests for the evaluation engine
//!
//! Ensures evaluation metrics satisfy mathematical invariants:
//! - Metrics bounded to [0, 1], never NaN or Infinity
//! - Bit-identical reports for identical inputs
//! - Edge-case policies (empty segments, perfect and disjoint predictions)
//! - Confusion matrix invariants

use proptest::collection::vec;
use proptest::prelude::*;
use tasar::{evaluate, EvalConfig, Example, GlobalMetrics, MetricSet};

// =============================================================================
// Strategy Helpers
// =============================================================================

const LABELS: [&str; 5] = ["administration", "careers", "events", "research", "social"];

/// Generate a label list drawn from the shared vocabulary
fn labels(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    vec((0..LABELS.len()).prop_map(|i| LABELS[i].to_string()), len)
}

/// Generate an example sequence with arbitrary predicted/true label lists
fn examples(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Example>> {
    vec((labels(0..4), labels(0..4)), len).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (predicted, truth))| Example::new(index, predicted, truth))
            .collect()
    })
}

/// Generate an example sequence together with a valid boundary into it
fn examples_with_boundary(
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = (Vec<Example>, usize)> {
    examples(len).prop_flat_map(|examples| {
        let len = examples.len();
        (Just(examples), 0..=len)
    })
}

fn config(boundary: usize) -> EvalConfig {
    EvalConfig {
        boundary,
        ..EvalConfig::default()
    }
}

fn metric_values(m: &MetricSet) -> [f64; 5] {
    [m.precision, m.recall, m.f1, m.jaccard, m.accuracy]
}

fn global_values(g: &GlobalMetrics) -> [f64; 4] {
    [g.precision, g.recall, g.f1, g.accuracy]
}

// =============================================================================
// Metric Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_per_example_metrics_bounded(examples in examples(0..50)) {
        let m = MetricSet::averaged_over(&examples);
        for value in metric_values(&m) {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "per-example metric {} not in [0, 1]",
                value
            );
            prop_assert!(
                !value.is_nan() && !value.is_infinite(),
                "per-example metric {} is NaN or Inf",
                value
            );
        }
    }

    #[test]
    fn prop_global_metrics_bounded(examples in examples(0..50)) {
        let g = GlobalMetrics::accumulated_over(&examples);
        for value in global_values(&g) {
            prop_assert!(
                (0.0..=1.0).contains(&value),
                "global metric {} not in [0, 1]",
                value
            );
            prop_assert!(
                !value.is_nan() && !value.is_infinite(),
                "global metric {} is NaN or Inf",
                value
            );
        }
    }

    #[test]
    fn prop_perfect_predictions_score_one(truths in vec(labels(1..4), 1..30)) {
        let examples: Vec<Example> = truths
            .into_iter()
            .enumerate()
            .map(|(index, truth)| Example::new(index, truth.clone(), truth))
            .collect();

        let m = MetricSet::averaged_over(&examples);
        for value in metric_values(&m) {
            prop_assert!(
                (value - 1.0).abs() < 1e-9,
                "perfect predictions should score 1.0, got {}",
                value
            );
        }

        let g = GlobalMetrics::accumulated_over(&examples);
        for value in global_values(&g) {
            prop_assert!((value - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_disjoint_predictions_score_zero(count in 1usize..30) {
        // Predicted and true sets non-empty and drawn from disjoint vocabularies
        let examples: Vec<Example> = (0..count)
            .map(|index| {
                Example::new(
                    index,
                    vec!["predicted-only".to_string()],
                    vec!["truth-only".to_string()],
                )
            })
            .collect();

        let m = MetricSet::averaged_over(&examples);
        for value in metric_values(&m) {
            prop_assert!(value.abs() < 1e-9, "disjoint sets should score 0.0, got {}", value);
        }
    }

    #[test]
    fn prop_report_deterministic((examples, boundary) in examples_with_boundary(0..40)) {
        let cfg = config(boundary);
        let first = evaluate(&examples, &cfg).unwrap();
        let second = evaluate(&examples, &cfg).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_report_metrics_bounded((examples, boundary) in examples_with_boundary(0..40)) {
        let report = evaluate(&examples, &config(boundary)).unwrap();
        for segment in [
            &report.first_segment,
            &report.second_segment,
            &report.whole_dataset,
        ] {
            for value in metric_values(&segment.per_example) {
                prop_assert!((0.0..=1.0).contains(&value) && !value.is_nan());
            }
        }
        for value in global_values(&report.global) {
            prop_assert!((0.0..=1.0).contains(&value) && !value.is_nan());
        }
    }

    #[test]
    fn prop_empty_first_segment_scores_zero(examples in examples(1..30)) {
        // Boundary 0 leaves the first segment empty: zeros, never vacuous 1.0
        let report = evaluate(&examples, &config(0)).unwrap();
        for value in metric_values(&report.first_segment.per_example) {
            prop_assert!(value.abs() < 1e-9);
        }
    }

    #[test]
    fn prop_confusion_total_bounded((examples, boundary) in examples_with_boundary(0..40)) {
        // Each single-label example contributes at most one cell
        let report = evaluate(&examples, &config(boundary)).unwrap();
        prop_assert!(report.confusion.total() <= examples.len() - boundary);
    }

    #[test]
    fn prop_top_confusions_sorted((examples, boundary) in examples_with_boundary(0..40)) {
        let report = evaluate(&examples, &config(boundary)).unwrap();
        for pair in report.top_confusions.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        prop_assert!(report.top_confusions.len() <= 5);
        for confusion in &report.top_confusions {
            prop_assert!(confusion.truth != confusion.predicted);
            prop_assert!(confusion.count > 0);
        }
    }

    #[test]
    fn prop_vocabulary_sorted((examples, boundary) in examples_with_boundary(0..40)) {
        let report = evaluate(&examples, &config(boundary)).unwrap();
        let categories = report.confusion.categories();
        for pair in categories.windows(2) {
            prop_assert!(pair[0] < pair[1], "vocabulary must be sorted and deduplicated");
        }
    }
}
