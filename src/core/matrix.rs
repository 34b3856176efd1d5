//! Pairwise similarity matrix over an ordered label sequence.

use serde::Serialize;
use tracing::debug;

use crate::detectors::similarity::LabelSimilarity;

/// Square similarity matrix whose rows and columns follow the label order
/// it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "MatrixRows")]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    /// Row-major scores, `labels.len()²` entries.
    scores: Vec<f64>,
}

/// Serialized form of a [`SimilarityMatrix`]: labels plus nested rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRows {
    /// Row/column labels
    pub labels: Vec<String>,
    /// One score vector per label
    pub rows: Vec<Vec<f64>>,
}

impl From<SimilarityMatrix> for MatrixRows {
    fn from(matrix: SimilarityMatrix) -> Self {
        let rows = matrix.to_rows();
        Self {
            labels: matrix.labels,
            rows,
        }
    }
}

impl SimilarityMatrix {
    /// Score every ordered pair of `labels`, diagonal included.
    ///
    /// The scorer is symmetric, so only the upper triangle is computed and
    /// mirrored. Duplicate labels keep their own rows and columns.
    pub fn build<S: LabelSimilarity + ?Sized>(labels: &[String], scorer: &S) -> Self {
        let n = labels.len();
        let mut scores = vec![0.0; n * n];

        for i in 0..n {
            scores[i * n + i] = scorer.similarity(&labels[i], &labels[i]);
            for j in (i + 1)..n {
                let score = scorer.similarity(&labels[i], &labels[j]);
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        debug!(labels = n, pairs = n * n, "Built similarity matrix");

        Self {
            labels: labels.to_vec(),
            scores,
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row/column labels in input order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Score at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn score(&self, i: usize, j: usize) -> f64 {
        let n = self.len();
        assert!(i < n && j < n, "matrix index ({i}, {j}) out of bounds for {n}x{n}");
        self.scores[i * n + j]
    }

    /// Score by label value, using the first row/column carrying each label.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.position(row)?;
        let j = self.position(column)?;
        Some(self.score(i, j))
    }

    /// Scores of row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.scores[i * n..(i + 1) * n]
    }

    /// Iterate over `(label, row)` pairs in order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.labels
            .iter()
            .enumerate()
            .map(move |(i, label)| (label.as_str(), self.row(i)))
    }

    /// Owned nested rows, the shape heatmap renderers expect.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.len()).map(|i| self.row(i).to_vec()).collect()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| candidate == label)
    }
}
