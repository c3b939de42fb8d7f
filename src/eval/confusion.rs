//! Confusion matrix over string categories
//!
//! Only meaningful under the single-label regime, where each example
//! contributes exactly one (true, predicted) pair. The category vocabulary is
//! drawn from the entire dataset's true labels, not just the evaluated
//! segment, so rare categories still appear as rows and columns with zero
//! counts and the matrix keeps its shape across segments.

use super::segment::{primary_label, Example};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Confusion matrix for single-label classification
///
/// Element `[i][j]` counts examples whose true category is `categories[i]`
/// and whose predicted category is `categories[j]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Category vocabulary, sorted lexicographically
    categories: Vec<String>,
    /// The matrix data: matrix[true][predicted] = count
    matrix: Vec<Vec<usize>>,
}

/// One off-diagonal confusion pair with its count
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Confusion {
    /// True category
    pub truth: String,
    /// Predicted category
    pub predicted: String,
    /// Number of examples confused this way
    pub count: usize,
}

impl ConfusionMatrix {
    /// Category vocabulary of a dataset: the union of all true labels,
    /// sorted lexicographically
    pub fn vocabulary_of(examples: &[Example]) -> Vec<String> {
        let set: BTreeSet<&str> = examples
            .iter()
            .flat_map(|e| e.truth.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Build the matrix over `segment_examples` using a fixed vocabulary.
    ///
    /// Each example contributes its authoritative (first) true and predicted
    /// categories. Examples with no true label, no prediction, or a predicted
    /// category outside the vocabulary add no cell; out-of-vocabulary
    /// predictions are dropped here but still count as false positives in
    /// micro-averaged metrics.
    pub fn from_examples(segment_examples: &[Example], mut categories: Vec<String>) -> Self {
        // Lookups binary-search the vocabulary; iteration order is the
        // reporting order. Both need it sorted and deduplicated.
        categories.sort();
        categories.dedup();
        let n = categories.len();
        let mut matrix = vec![vec![0usize; n]; n];

        for example in segment_examples {
            let Some(truth) = primary_label(&example.truth) else {
                continue;
            };
            let Some(row) = position(&categories, truth) else {
                continue;
            };
            let Some(predicted) = primary_label(&example.predicted) else {
                continue;
            };
            if let Some(col) = position(&categories, predicted) {
                matrix[row][col] += 1;
            }
        }

        Self { categories, matrix }
    }

    /// The category vocabulary
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Count for a (true, predicted) category pair; 0 for unknown categories
    pub fn get(&self, truth: &str, predicted: &str) -> usize {
        match (
            position(&self.categories, truth),
            position(&self.categories, predicted),
        ) {
            (Some(row), Some(col)) => self.matrix[row][col],
            _ => 0,
        }
    }

    /// Total number of counted examples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Off-diagonal cells with count > 0, sorted descending by count and
    /// truncated to `n`. Ties keep row-major matrix order, so ranking is
    /// reproducible: lexicographic on true category, then predicted.
    pub fn top_confusions(&self, n: usize) -> Vec<Confusion> {
        let mut confusions: Vec<Confusion> = Vec::new();
        for (row, truth) in self.categories.iter().enumerate() {
            for (col, predicted) in self.categories.iter().enumerate() {
                let count = self.matrix[row][col];
                if row != col && count > 0 {
                    confusions.push(Confusion {
                        truth: truth.clone(),
                        predicted: predicted.clone(),
                        count,
                    });
                }
            }
        }
        confusions.sort_by(|a, b| b.count.cmp(&a.count));
        confusions.truncate(n);
        confusions
    }
}

fn position(categories: &[String], category: &str) -> Option<usize> {
    categories
        .binary_search_by(|c| c.as_str().cmp(category))
        .ok()
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .categories
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(4)
            .max(4)
            + 2;
        let label = width + 5;

        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "{:>label$}", "", label = label)?;
        for category in &self.categories {
            write!(f, "{category:>width$}")?;
        }
        writeln!(f)?;

        // Rows
        for (row, category) in self.categories.iter().enumerate() {
            write!(f, "True {category:>width$}")?;
            for col in 0..self.categories.len() {
                write!(f, "{:>width$}", self.matrix[row][col])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
