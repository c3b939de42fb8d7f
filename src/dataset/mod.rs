//! Dataset records and example construction
//!
//! Ground truth and predictions arrive as two JSON sequences aligned by
//! index. A record missing its label field is treated as an empty label set
//! rather than aborting the run; the occurrences are counted so data-quality
//! issues stay visible to the caller. Unequal sequence lengths are a fatal
//! configuration error.

use crate::error::{Error, Result};
use crate::eval::Example;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One ground-truth record
#[derive(Clone, Debug, Deserialize)]
pub struct EmailRecord {
    /// Ground-truth labels; single-label records conventionally hold one
    #[serde(default)]
    pub category: Option<Vec<String>>,
}

/// One model-output record
#[derive(Clone, Debug, Deserialize)]
pub struct PredictionRecord {
    /// The classifier's structured output
    #[serde(default)]
    pub predicted_classification: Option<Classification>,
}

/// The label-bearing part of a prediction
#[derive(Clone, Debug, Deserialize)]
pub struct Classification {
    /// Labels assigned by the classifier; empty means no label assigned
    #[serde(default)]
    pub relevant_keywords: Option<Vec<String>>,
}

/// Warning-level counts of records whose label field was absent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DataWarnings {
    /// Ground-truth records without a `category` field
    pub missing_truth: usize,
    /// Prediction records without `predicted_classification.relevant_keywords`
    pub missing_predictions: usize,
}

impl DataWarnings {
    /// Whether every record carried its label field
    pub fn is_clean(&self) -> bool {
        self.missing_truth == 0 && self.missing_predictions == 0
    }
}

/// Load ground-truth records from a JSON array file
pub fn load_truth(path: &Path) -> Result<Vec<EmailRecord>> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load prediction records from a JSON array file
pub fn load_predictions(path: &Path) -> Result<Vec<PredictionRecord>> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge ground truth with predictions by index.
///
/// Both sequences must have equal length; any partial pairing would produce
/// misleading metrics, so a mismatch aborts before any example is built.
pub fn merge(
    truth: &[EmailRecord],
    predictions: &[PredictionRecord],
) -> Result<(Vec<Example>, DataWarnings)> {
    if truth.len() != predictions.len() {
        return Err(Error::LengthMismatch {
            truth: truth.len(),
            predictions: predictions.len(),
        });
    }

    let mut warnings = DataWarnings::default();
    let examples = truth
        .iter()
        .zip(predictions.iter())
        .enumerate()
        .map(|(index, (record, prediction))| {
            let truth_labels = match &record.category {
                Some(labels) => labels.clone(),
                None => {
                    warnings.missing_truth += 1;
                    Vec::new()
                }
            };
            let predicted_labels = match prediction
                .predicted_classification
                .as_ref()
                .and_then(|c| c.relevant_keywords.as_ref())
            {
                Some(labels) => labels.clone(),
                None => {
                    warnings.missing_predictions += 1;
                    Vec::new()
                }
            };
            Example::new(index, predicted_labels, truth_labels)
        })
        .collect();

    Ok((examples, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn truth_record(labels: &[&str]) -> EmailRecord {
        EmailRecord {
            category: Some(labels.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn prediction_record(labels: &[&str]) -> PredictionRecord {
        PredictionRecord {
            predicted_classification: Some(Classification {
                relevant_keywords: Some(labels.iter().map(|s| s.to_string()).collect()),
            }),
        }
    }

    #[test]
    fn test_merge_aligned_records() {
        let truth = vec![truth_record(&["events"]), truth_record(&["careers"])];
        let predictions = vec![prediction_record(&["events"]), prediction_record(&[])];

        let (examples, warnings) = merge(&truth, &predictions).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].index, 0);
        assert_eq!(examples[0].predicted, vec!["events".to_string()]);
        assert_eq!(examples[1].truth, vec!["careers".to_string()]);
        assert!(examples[1].predicted.is_empty());
        assert!(warnings.is_clean());
    }

    #[test]
    fn test_merge_length_mismatch() {
        let truth = vec![truth_record(&["events"])];
        let predictions = vec![];
        assert!(merge(&truth, &predictions).is_err());
    }

    #[test]
    fn test_merge_missing_truth_field() {
        let truth = vec![EmailRecord { category: None }];
        let predictions = vec![prediction_record(&["events"])];

        let (examples, warnings) = merge(&truth, &predictions).unwrap();
        assert!(examples[0].truth.is_empty());
        assert_eq!(warnings.missing_truth, 1);
        assert_eq!(warnings.missing_predictions, 0);
    }

    #[test]
    fn test_merge_missing_prediction_field() {
        let truth = vec![truth_record(&["events"]), truth_record(&["careers"])];
        let predictions = vec![
            PredictionRecord {
                predicted_classification: None,
            },
            PredictionRecord {
                predicted_classification: Some(Classification {
                    relevant_keywords: None,
                }),
            },
        ];

        let (examples, warnings) = merge(&truth, &predictions).unwrap();
        assert!(examples[0].predicted.is_empty());
        assert!(examples[1].predicted.is_empty());
        assert_eq!(warnings.missing_predictions, 2);
    }

    #[test]
    fn test_load_truth_ignores_extra_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emails.json");
        std::fs::write(
            &path,
            r#"[
                {"subject": "networking night", "content": "...", "category": ["events", "research"]},
                {"subject": "new sections", "content": "..."}
            ]"#,
        )
        .unwrap();

        let records = load_truth(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].category,
            Some(vec!["events".to_string(), "research".to_string()])
        );
        assert_eq!(records[1].category, None);
    }

    #[test]
    fn test_load_predictions_nested_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("predictions.json");
        std::fs::write(
            &path,
            r#"[
                {"predicted_classification": {"relevant_keywords": ["careers"], "summary": "..."}},
                {"predicted_classification": {"relevant_keywords": []}}
            ]"#,
        )
        .unwrap();

        let records = load_predictions(&path).unwrap();
        assert_eq!(records.len(), 2);
        let first = records[0]
            .predicted_classification
            .as_ref()
            .unwrap()
            .relevant_keywords
            .as_ref()
            .unwrap();
        assert_eq!(first, &vec!["careers".to_string()]);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_truth(Path::new("/nonexistent/emails.json")).is_err());
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_predictions(&path).is_err());
    }
}
