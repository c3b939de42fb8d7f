//! Tasar: evaluation engine for LLM-assisted email classification
//!
//! Scores a fixed set of (prediction, ground-truth) label assignments across
//! heterogeneous dataset segments: a leading multi-label block and a trailing
//! single-label block, split at a configurable boundary. Produces per-example
//! averages, micro-averaged global metrics, and a confusion matrix with a
//! ranked list of top confusions.
//!
//! Evaluation is a pure function of its inputs: no I/O, no shared state, and
//! deterministic output for identical input. The `dataset` module handles the
//! JSON interchange with the classification pipeline; the `cli` module wraps
//! everything in the `tasar` binary.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod eval;

pub use error::{Error, Result};
pub use eval::{
    evaluate, Confusion, ConfusionMatrix, EvalConfig, EvaluationReport, Example, GlobalMetrics,
    LabelRegime, MetricSet, Segment, SegmentReport,
};
