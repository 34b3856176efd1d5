//! Integration tests for the public reduction pipeline.

use approx::assert_relative_eq;
use labelfold_rs::core::config::LabelfoldConfig;
use labelfold_rs::detectors::grouping::extract_groups;
use labelfold_rs::detectors::reduction::reduce_labels;
use labelfold_rs::io::labels::{parse_labels, LabelFormat};
use labelfold_rs::io::substitution::substitute_values;
use labelfold_rs::{run, similarity, sweep, Pipeline, SequenceRatio, SimilarityMatrix};
use proptest::prelude::*;

const SURVEY: [&str; 3] = ["Customer Age", "Customer Age (years)", "Region"];

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[test]
fn survey_titles_reduce_to_two_labels() {
    let (labels, trajectory, independence) = run(&SURVEY, 0.5, 1);
    assert_eq!(labels, vec!["Region", "Customer Age"]);
    assert_eq!(trajectory, vec![3, 2]);
    assert_eq!(independence, 1.0);
}

#[test]
fn known_similarity_values() {
    assert_relative_eq!(similarity("Age in years", "Age"), 0.4, epsilon = 1e-12);
    assert_relative_eq!(
        similarity("Customer Age", "Customer Age (years)"),
        0.75,
        epsilon = 1e-12
    );
    assert_eq!(similarity("", ""), 1.0);
}

#[test]
fn age_group_collapses_to_age() {
    let labels = owned(&["Age in years", "Age"]);
    let matrix = SimilarityMatrix::build(&labels, &SequenceRatio::default());
    let extraction = extract_groups(&matrix, 0.3);
    assert_eq!(reduce_labels(&extraction, false), vec!["Age"]);
}

#[test]
fn threshold_above_one_yields_singletons() {
    let labels = owned(&SURVEY);
    let matrix = SimilarityMatrix::build(&labels, &SequenceRatio::default());
    let extraction = extract_groups(&matrix, 1.5);
    assert!(extraction.is_all_singletons());
    assert_eq!(extraction.singletons, labels);
}

#[test]
fn configured_pipeline_matches_free_function() {
    let config = LabelfoldConfig::from_yaml_str("reduction:\n  threshold: 0.5\n").unwrap();
    let pipeline = Pipeline::new(config).unwrap();
    let outcome = pipeline.run(&SURVEY);

    let (labels, trajectory, independence) = run(&SURVEY, 0.5, 1);
    assert_eq!(outcome.final_labels, labels);
    assert_eq!(outcome.trajectory, trajectory);
    assert_eq!(outcome.mean_independence, independence);
    assert_eq!(outcome.levels[0].extraction.group_count(), 1);
}

#[test]
fn sweep_follows_input_order() {
    assert_eq!(sweep(&SURVEY, &[0.9, 0.5]), vec![0.83, 1.0]);
    assert_eq!(sweep(&SURVEY, &[0.5, 0.9]), vec![1.0, 0.83]);
}

#[test]
fn parsed_labels_feed_the_pipeline_and_substitution() {
    let labels = parse_labels(
        "Customer Age\nCustomer Age (years)\n\nRegion\n",
        LabelFormat::Lines,
    )
    .unwrap();
    let (reduced, _, _) = run(&labels, 0.5, 1);

    let column = ["customer age (years)", "Region of sale", "Income"];
    assert_eq!(
        substitute_values(&column, &reduced),
        vec!["Customer Age", "Region", "Income"]
    );
}

fn label_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,8}", 0..8)
}

proptest! {
    #[test]
    fn reduced_labels_are_distinct(labels in label_strategy(), threshold in 0.0f64..1.0) {
        let (reduced, trajectory, _) = run(&labels, threshold, 2);
        let mut seen = std::collections::HashSet::new();
        prop_assert!(reduced.iter().all(|label| seen.insert(label.clone())));
        prop_assert_eq!(trajectory.len(), 3);
        prop_assert_eq!(trajectory[0], labels.len());
        prop_assert_eq!(*trajectory.last().unwrap(), reduced.len());
    }

    #[test]
    fn zero_levels_is_identity(labels in label_strategy()) {
        let (reduced, trajectory, _) = run(&labels, 0.8, 0);
        prop_assert_eq!(reduced, labels.clone());
        prop_assert_eq!(trajectory, vec![labels.len()]);
    }

    #[test]
    fn mean_independence_is_bounded(labels in label_strategy()) {
        let (_, _, independence) = run(&labels, 0.6, 1);
        prop_assert!(independence.is_nan() || (0.0..=1.0).contains(&independence));
    }
}
