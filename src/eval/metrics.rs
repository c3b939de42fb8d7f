//! Set-overlap metric primitives and their two aggregation flavors
//!
//! Per-example metrics follow vacuous-truth conventions (an empty set on the
//! denominator side scores 1.0); micro-averaged metrics are computed strictly
//! from summed counts and fall back to 0.0 on empty denominators. An empty
//! segment reports zero in both flavors, never a vacuous 1.0 — a misconfigured
//! boundary must not look like a perfect score.

use super::segment::Example;
use serde::Serialize;
use std::collections::BTreeSet;

/// Jaccard similarity `|a ∩ b| / |a ∪ b|`; 1.0 when both sets are empty
pub fn jaccard(predicted: &BTreeSet<&str>, truth: &BTreeSet<&str>) -> f64 {
    let union = predicted.union(truth).count();
    if union == 0 {
        return 1.0;
    }
    predicted.intersection(truth).count() as f64 / union as f64
}

/// Precision `|p ∩ t| / |p|`; 1.0 when no labels were predicted
pub fn precision(predicted: &BTreeSet<&str>, truth: &BTreeSet<&str>) -> f64 {
    if predicted.is_empty() {
        return 1.0;
    }
    predicted.intersection(truth).count() as f64 / predicted.len() as f64
}

/// Recall `|p ∩ t| / |t|`; 1.0 when there was nothing to find
pub fn recall(predicted: &BTreeSet<&str>, truth: &BTreeSet<&str>) -> f64 {
    if truth.is_empty() {
        return 1.0;
    }
    predicted.intersection(truth).count() as f64 / truth.len() as f64
}

/// Harmonic mean of precision and recall; 0.0 when both are zero
pub fn f1(predicted: &BTreeSet<&str>, truth: &BTreeSet<&str>) -> f64 {
    let p = precision(predicted, truth);
    let r = recall(predicted, truth);
    f1_from(p, r)
}

fn f1_from(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    }
}

/// Binary correctness indicator: 1.0 iff at least one predicted label is
/// correct. Intended for single-label use, not a set-similarity score.
pub fn accuracy_hit(predicted: &BTreeSet<&str>, truth: &BTreeSet<&str>) -> f64 {
    if predicted.intersection(truth).next().is_some() {
        1.0
    } else {
        0.0
    }
}

/// The five per-example metrics, individually or averaged over a segment
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MetricSet {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub jaccard: f64,
    pub accuracy: f64,
}

impl MetricSet {
    /// Compute all five primitives for one example
    pub fn for_example(example: &Example) -> Self {
        let predicted = example.predicted_set();
        let truth = example.truth_set();
        Self {
            precision: precision(&predicted, &truth),
            recall: recall(&predicted, &truth),
            f1: f1(&predicted, &truth),
            jaccard: jaccard(&predicted, &truth),
            accuracy: accuracy_hit(&predicted, &truth),
        }
    }

    /// Arithmetic mean of each metric across the examples.
    ///
    /// An empty range yields all zeros.
    pub fn averaged_over(examples: &[Example]) -> Self {
        if examples.is_empty() {
            return Self::default();
        }
        let mut sum = Self::default();
        for example in examples {
            let m = Self::for_example(example);
            sum.precision += m.precision;
            sum.recall += m.recall;
            sum.f1 += m.f1;
            sum.jaccard += m.jaccard;
            sum.accuracy += m.accuracy;
        }
        let n = examples.len() as f64;
        Self {
            precision: sum.precision / n,
            recall: sum.recall / n,
            f1: sum.f1 / n,
            jaccard: sum.jaccard / n,
            accuracy: sum.accuracy / n,
        }
    }

    /// Metric values in report row order, paired with display names
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1", self.f1),
            ("Jaccard", self.jaccard),
            ("Accuracy", self.accuracy),
        ]
    }
}

/// Micro-averaged metrics from accumulated true/false positive/negative
/// counts. Jaccard is omitted: it has no meaningful micro form without
/// redefinition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct GlobalMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Fraction of examples with at least one correct predicted label
    pub accuracy: f64,
}

impl GlobalMetrics {
    /// Accumulate TP/FP/FN across the examples and derive the metrics.
    ///
    /// Out-of-vocabulary predicted labels count as false positives here;
    /// precision accounting never silently drops a real mismatch. Empty
    /// denominators (including an empty range) yield 0.0.
    pub fn accumulated_over(examples: &[Example]) -> Self {
        let mut tp = 0usize;
        let mut fp = 0usize;
        let mut fn_ = 0usize;
        let mut hits = 0usize;

        for example in examples {
            let predicted = example.predicted_set();
            let truth = example.truth_set();
            let inter = predicted.intersection(&truth).count();
            tp += inter;
            fp += predicted.len() - inter;
            fn_ += truth.len() - inter;
            if inter > 0 {
                hits += 1;
            }
        }

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };
        let accuracy = if examples.is_empty() {
            0.0
        } else {
            hits as f64 / examples.len() as f64
        };

        Self {
            precision,
            recall,
            f1: f1_from(precision, recall),
            accuracy,
        }
    }

    /// Metric values in report row order, paired with display names
    pub fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1", self.f1),
            ("Accuracy", self.accuracy),
        ]
    }
}
