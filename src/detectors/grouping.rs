//! Row-wise threshold grouping of similar labels.
//!
//! Every matrix row proposes one candidate group: the row label plus every
//! column label scoring strictly above the threshold. Identical candidates
//! collapse into one group. There is no transitive merge step, so two labels
//! only share a group when some single row reaches both of them.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::matrix::SimilarityMatrix;

/// A set of labels linked through one matrix row.
pub type Group = BTreeSet<String>;

/// Outcome of threshold grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupExtraction {
    /// Distinct multi-member groups, in sorted order
    pub groups: Vec<Group>,
    /// Labels whose row reached no other label, in first-seen row order
    pub singletons: Vec<String>,
}

impl GroupExtraction {
    /// Total number of groups, singletons included.
    pub fn group_count(&self) -> usize {
        self.groups.len() + self.singletons.len()
    }

    /// Whether no label was grouped with another.
    pub fn is_all_singletons(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition the labels of `matrix` into row groups above `threshold`.
///
/// The comparison is strict, so a threshold of `1.0` or more leaves every
/// label on its own, and a threshold below `0.0` groups every row with every
/// label. A NaN threshold matches nothing.
pub fn extract_groups(matrix: &SimilarityMatrix, threshold: f64) -> GroupExtraction {
    let labels = matrix.labels();
    let mut groups: BTreeSet<Group> = BTreeSet::new();
    let mut singletons: IndexSet<String> = IndexSet::new();

    for (label, row) in matrix.rows() {
        let mut group: Group = BTreeSet::new();
        group.insert(label.to_string());
        for (column, score) in labels.iter().zip(row) {
            if *score > threshold {
                group.insert(column.clone());
            }
        }

        if group.len() == 1 {
            singletons.insert(label.to_string());
        } else {
            groups.insert(group);
        }
    }

    debug!(
        rows = matrix.len(),
        threshold,
        groups = groups.len(),
        singletons = singletons.len(),
        "Extracted similarity groups"
    );

    GroupExtraction {
        groups: groups.into_iter().collect(),
        singletons: singletons.into_iter().collect(),
    }
}
