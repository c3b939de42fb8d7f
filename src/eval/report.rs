//! Report assembly and rendering
//!
//! `evaluate` is the single entry point: a pure function from an example
//! sequence and a configuration to an immutable report. Rendering is a
//! stateless formatting step and never affects the computed numbers.

use super::confusion::{Confusion, ConfusionMatrix};
use super::metrics::{GlobalMetrics, MetricSet};
use super::segment::{EvalConfig, Example, LabelRegime, Segment};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Per-example metrics for one named segment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentReport {
    /// The evaluated range
    pub segment: Segment,
    /// Mean of the per-example metrics across the range
    pub per_example: MetricSet,
}

impl SegmentReport {
    fn over(examples: &[Example], segment: Segment) -> Self {
        let per_example = MetricSet::averaged_over(segment.slice(examples));
        Self {
            segment,
            per_example,
        }
    }
}

/// The complete result of one evaluation run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Leading multi-label segment
    pub first_segment: SegmentReport,
    /// Trailing single-label segment
    pub second_segment: SegmentReport,
    /// Full dataset range
    pub whole_dataset: SegmentReport,
    /// Micro-averaged metrics for the single-label segment
    pub global: GlobalMetrics,
    /// Confusion matrix for the single-label segment
    pub confusion: ConfusionMatrix,
    /// Ranked off-diagonal confusion pairs
    pub top_confusions: Vec<Confusion>,
}

/// Evaluate predictions against ground truth across the configured segments.
///
/// The boundary splits the dataset into a multi-label block `[0, boundary)`
/// and a single-label block `[boundary, len)`. A boundary outside the dataset
/// aborts before any metric is computed.
pub fn evaluate(examples: &[Example], config: &EvalConfig) -> Result<EvaluationReport> {
    let len = examples.len();
    if config.boundary > len {
        return Err(Error::BoundaryOutOfRange {
            boundary: config.boundary,
            len,
        });
    }

    let first = Segment::new(
        config.first_name.clone(),
        0,
        config.boundary,
        LabelRegime::MultiLabel,
    );
    let second = Segment::new(
        config.second_name.clone(),
        config.boundary,
        len,
        LabelRegime::SingleLabel,
    );
    let whole = Segment::new(config.whole_name.clone(), 0, len, LabelRegime::MultiLabel);

    let global = GlobalMetrics::accumulated_over(second.slice(examples));
    let confusion =
        ConfusionMatrix::from_examples(second.slice(examples), ConfusionMatrix::vocabulary_of(examples));
    let top_confusions = confusion.top_confusions(config.top_confusions);

    Ok(EvaluationReport {
        first_segment: SegmentReport::over(examples, first),
        second_segment: SegmentReport::over(examples, second),
        whole_dataset: SegmentReport::over(examples, whole),
        global,
        confusion,
        top_confusions,
    })
}

const RULE: &str =
    "--------------------------------------------------------------------------------";
const BANNER: &str =
    "================================================================================";

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "CLASSIFICATION EVALUATION REPORT")?;
        writeln!(f, "{BANNER}")?;

        writeln!(f)?;
        writeln!(f, "PER-EXAMPLE METRICS:")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "{:<15} {:<15} {:<15} {:<15}",
            "Metric",
            self.first_segment.segment.name,
            self.second_segment.segment.name,
            self.whole_dataset.segment.name
        )?;
        writeln!(f, "{RULE}")?;
        let rows = [
            self.first_segment.per_example.named(),
            self.second_segment.per_example.named(),
            self.whole_dataset.per_example.named(),
        ];
        for i in 0..rows[0].len() {
            writeln!(
                f,
                "{:<15} {:<15.2} {:<15.2} {:<15.2}",
                rows[0][i].0, rows[0][i].1, rows[1][i].1, rows[2][i].1
            )?;
        }

        writeln!(f)?;
        writeln!(f, "GLOBAL METRICS ({}):", self.second_segment.segment.name)?;
        writeln!(f, "{RULE}")?;
        for (name, value) in self.global.named() {
            writeln!(f, "{name:<15} {value:.2}")?;
        }

        writeln!(f)?;
        writeln!(f, "TOP CONFUSIONS:")?;
        writeln!(f, "{RULE}")?;
        for confusion in &self.top_confusions {
            writeln!(
                f,
                "True: {}, Predicted: {}, Count: {}",
                confusion.truth, confusion.predicted, confusion.count
            )?;
        }
        writeln!(f, "{BANNER}")?;

        Ok(())
    }
}
