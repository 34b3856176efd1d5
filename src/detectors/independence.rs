//! Independence metric for reduced label sets.
//!
//! A label is independent of another when it does not occur inside it as a
//! substring. The per-label score is the share of the other labels it is
//! independent of, rounded to two decimals; the set score is the mean of the
//! per-label scores. Labels of at most one character never count as
//! independent, and a label with no others scores 0.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Independence of one label against the rest of its set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelIndependence {
    /// The scored label
    pub label: String,
    /// Number of other labels that do not contain it
    pub independent: usize,
    /// Number of other labels in the set
    pub others: usize,
    /// `independent / others`, rounded to two decimals
    pub score: f64,
}

/// Round to two decimals using the exact value of `value`.
///
/// `1/40` is slightly above `0.025` and rounds up; exact ties such as
/// `0.125` go to even.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Per-label independence for the distinct labels of `labels`, in first-seen
/// order.
pub fn label_independence<S: AsRef<str>>(labels: &[S]) -> Vec<LabelIndependence> {
    let distinct: IndexSet<&str> = labels.iter().map(|label| label.as_ref()).collect();

    distinct
        .iter()
        .map(|&label| {
            let others = distinct.len() - 1;
            let eligible = label.chars().count() > 1;
            let independent = if eligible {
                distinct
                    .iter()
                    .filter(|&&other| other != label && !other.contains(label))
                    .count()
            } else {
                0
            };
            let score = if others == 0 {
                0.0
            } else {
                round_to_hundredths(independent as f64 / others as f64)
            };

            LabelIndependence {
                label: label.to_string(),
                independent,
                others,
                score,
            }
        })
        .collect()
}

/// Mean independence of a label set; NaN when the set is empty.
pub fn mean_independence<S: AsRef<str>>(labels: &[S]) -> f64 {
    let scores = label_independence(labels);
    if scores.is_empty() {
        return f64::NAN;
    }
    scores.iter().map(|entry| entry.score).sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unrelated_labels_are_fully_independent() {
        assert_eq!(mean_independence(&["Region", "Customer Age"]), 1.0);
    }

    #[test]
    fn substring_relation_lowers_independence() {
        let scores = label_independence(&["Customer Age", "Customer Age (years)", "Region"]);
        assert_eq!(scores[0].independent, 1);
        assert_eq!(scores[0].score, 0.5);
        assert_eq!(scores[1].score, 1.0);
        assert_eq!(scores[2].score, 1.0);

        assert_relative_eq!(
            mean_independence(&["Customer Age", "Customer Age (years)", "Region"]),
            2.5 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn single_label_scores_zero() {
        assert_eq!(mean_independence(&["Region"]), 0.0);
    }

    #[test]
    fn empty_set_is_nan() {
        assert!(mean_independence::<&str>(&[]).is_nan());
    }

    #[test]
    fn short_labels_are_never_independent() {
        let scores = label_independence(&["A", "Region", ""]);
        assert_eq!(scores[0].score, 0.0);
        assert_eq!(scores[2].score, 0.0);
        // "Region" does not occur in "A" nor in ""
        assert_eq!(scores[1].score, 1.0);
    }

    #[test]
    fn duplicates_are_scored_once() {
        let scores = label_independence(&["Age", "Age", "Region"]);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].others, 1);
        assert_eq!(mean_independence(&["Age", "Age", "Region"]), 1.0);
    }

    #[test]
    fn scores_are_rounded_to_two_decimals() {
        let labels = ["Age", "Age group", "Income", "Region"];
        let scores = label_independence(&labels);
        // "Age" occurs in "Age group": 2 of 3 others
        assert_eq!(scores[0].score, 0.67);
    }

    #[test]
    fn rounding_uses_exact_decimal_value() {
        // 1/40 and 3/40 sit just above the tie in binary
        assert_eq!(round_to_hundredths(1.0 / 40.0), 0.03);
        assert_eq!(round_to_hundredths(3.0 / 40.0), 0.07);
        assert_eq!(round_to_hundredths(0.125), 0.12);
        assert_eq!(round_to_hundredths(0.375), 0.38);
        assert_eq!(round_to_hundredths(2.0 / 3.0), 0.67);
        assert!(round_to_hundredths(f64::NAN).is_nan());
    }

    #[test]
    fn large_sets_round_one_in_forty_up() {
        let mut labels = vec!["ab".to_string()];
        labels.extend((0..39).map(|i| format!("ab{i:02}")));
        labels.push("zz".to_string());

        let scores = label_independence(&labels);
        assert_eq!(scores[0].independent, 1);
        assert_eq!(scores[0].others, 40);
        assert_eq!(scores[0].score, 0.03);
    }
}
