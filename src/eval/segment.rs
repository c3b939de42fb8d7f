//! Examples, segments, and evaluation configuration

use serde::Serialize;
use std::collections::BTreeSet;

/// One evaluated item: a prediction merged with its ground-truth record.
///
/// Labels keep their source order (the first ground-truth label is the
/// authoritative category for single-label records); set operations collapse
/// duplicates. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Position in the dataset. Segment boundaries are index ranges, so this
    /// is externally meaningful.
    pub index: usize,
    /// Labels assigned by the classifier, possibly empty
    pub predicted: Vec<String>,
    /// Ground-truth labels, possibly empty
    pub truth: Vec<String>,
}

impl Example {
    /// Create an example from its merged record fields
    pub fn new(index: usize, predicted: Vec<String>, truth: Vec<String>) -> Self {
        Self {
            index,
            predicted,
            truth,
        }
    }

    /// Predicted labels as a set (duplicates collapse, order irrelevant)
    pub fn predicted_set(&self) -> BTreeSet<&str> {
        self.predicted.iter().map(String::as_str).collect()
    }

    /// Ground-truth labels as a set (duplicates collapse, order irrelevant)
    pub fn truth_set(&self) -> BTreeSet<&str> {
        self.truth.iter().map(String::as_str).collect()
    }
}

/// The authoritative category of an ordered label list.
///
/// Single-label records conventionally hold exactly one label; a record
/// carrying zero or several labels is resolved by this one rule rather than
/// by positional indexing at each use site.
pub fn primary_label(labels: &[String]) -> Option<&str> {
    labels.first().map(String::as_str)
}

/// Labeling regime of a segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelRegime {
    /// Ground truth may contain several labels, order irrelevant
    MultiLabel,
    /// Ground truth conventionally holds exactly one label; the first
    /// element is authoritative for confusion-matrix purposes
    SingleLabel,
}

/// A contiguous, named index range `[start, end)` over the example sequence
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Display name
    pub name: String,
    /// Inclusive start index
    pub start: usize,
    /// Exclusive end index
    pub end: usize,
    /// Labeling regime for this range
    pub regime: LabelRegime,
}

impl Segment {
    /// Create a segment. The range must lie within the dataset; `evaluate`
    /// validates the configured boundary before any segment is built.
    pub fn new(name: impl Into<String>, start: usize, end: usize, regime: LabelRegime) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            regime,
        }
    }

    /// Number of examples in range
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The examples this segment covers
    pub fn slice<'a>(&self, examples: &'a [Example]) -> &'a [Example] {
        &examples[self.start..self.end]
    }
}

/// Configuration for an evaluation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Index where the multi-label block ends and the single-label block
    /// begins. Must not exceed the dataset length.
    pub boundary: usize,
    /// Number of ranked confusion pairs to keep in the report
    pub top_confusions: usize,
    /// Display name for the leading multi-label segment
    pub first_name: String,
    /// Display name for the trailing single-label segment
    pub second_name: String,
    /// Display name for the full-range segment
    pub whole_name: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            boundary: 65,
            top_confusions: 5,
            first_name: "First Half".to_string(),
            second_name: "Second Half".to_string(),
            whole_name: "Whole Dataset".to_string(),
        }
    }
}
