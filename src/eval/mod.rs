//! Classification evaluation engine
//!
//! Scores predicted label assignments against ground truth across
//! heterogeneous dataset segments and produces per-example, micro-averaged,
//! and confusion-matrix statistics.
//!
//! ## Architecture
//!
//! - `metrics`: set-overlap primitives and their two aggregation flavors
//! - `segment`: examples, index ranges, labeling regimes, run configuration
//! - `confusion`: single-label confusion matrix and ranked confusions
//! - `report`: report assembly (`evaluate`) and text rendering
//!
//! ## Example
//!
//! ```ignore
//! use tasar::eval::{evaluate, EvalConfig, Example};
//!
//! let examples = vec![Example::new(0, predicted, truth), /* ... */];
//! let report = evaluate(&examples, &EvalConfig::default())?;
//! println!("{report}");
//! ```

mod confusion;
mod metrics;
mod report;
mod segment;


// Re-export all public types and functions
pub use confusion::{Confusion, ConfusionMatrix};
pub use metrics::{accuracy_hit, f1, jaccard, precision, recall, GlobalMetrics, MetricSet};
pub use report::{evaluate, EvaluationReport, SegmentReport};
pub use segment::{primary_label, EvalConfig, Example, LabelRegime, Segment};
