//! Crate-wide error types
//!
//! Configuration errors are fatal: the run aborts before any metric is
//! computed, since a partial result over misaligned data would be misleading.

use std::path::PathBuf;

/// Evaluation error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dataset length mismatch: {truth} ground-truth records vs {predictions} prediction records")]
    LengthMismatch { truth: usize, predictions: usize },

    #[error("segment boundary {boundary} outside dataset of {len} examples")]
    BoundaryOutOfRange { boundary: usize, len: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
