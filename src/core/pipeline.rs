//! Label reduction pipeline.
//!
//! One level builds the similarity matrix of the current labels, extracts row
//! groups above the threshold and replaces each group with its common
//! substring. Levels are chained, each working on the previous level's
//! output. The independence of the final label set is scored once all levels
//! have run.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::LabelfoldConfig;
use crate::core::errors::Result;
use crate::core::matrix::SimilarityMatrix;
use crate::detectors::grouping::{extract_groups, GroupExtraction};
use crate::detectors::independence::{
    label_independence, mean_independence, round_to_hundredths, LabelIndependence,
};
use crate::detectors::reduction::reduce_labels;
use crate::detectors::similarity::{LabelSimilarity, SequenceRatio};

/// Axis label for thresholds in sweep charts.
pub const SIMILARITY_AXIS_LABEL: &str = "Similarity (%)";

/// Axis label for independence in sweep charts.
pub const INDEPENDENCE_AXIS_LABEL: &str = "Mean independence of values (%)";

/// Diagnostics for a single reduction level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelReport {
    /// 1-based level number
    pub level: usize,
    /// Similarity matrix of the labels entering this level
    pub matrix: SimilarityMatrix,
    /// Groups found in the matrix
    pub extraction: GroupExtraction,
    /// Labels leaving this level
    pub labels: Vec<String>,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    /// Unique identifier for this run
    pub run_id: String,
    /// When the run started
    pub timestamp: DateTime<Utc>,
    /// Processing time in seconds
    pub processing_time: f64,
    /// Threshold used for grouping
    pub threshold: f64,
    /// Final reduced labels
    pub final_labels: Vec<String>,
    /// Label count before the first level, then after each level
    pub trajectory: Vec<usize>,
    /// Mean independence of the final labels (NaN when there are none)
    pub mean_independence: f64,
    /// Per-label independence of the final labels
    pub independence: Vec<LabelIndependence>,
    /// Per-level diagnostics
    pub levels: Vec<LevelReport>,
}

impl PipelineRun {
    /// Matrix of the last level, for heatmap export.
    pub fn last_matrix(&self) -> Option<&SimilarityMatrix> {
        self.levels.last().map(|level| &level.matrix)
    }
}

/// One point of a threshold sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Grouping threshold
    pub threshold: f64,
    /// Label count before and after the single level
    pub trajectory: Vec<usize>,
    /// Mean independence after reduction, rounded to two decimals
    pub mean_independence: f64,
}

impl SweepPoint {
    /// Number of labels left after reduction.
    pub fn feature_count(&self) -> usize {
        self.trajectory.last().copied().unwrap_or(0)
    }
}

/// Percentage series for plotting independence against threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSeries {
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Thresholds in percent
    pub x: Vec<f64>,
    /// Mean independence in percent
    pub y: Vec<f64>,
}

impl SweepSeries {
    /// Convert sweep points to percentages.
    pub fn from_points(points: &[SweepPoint]) -> Self {
        Self {
            x_label: SIMILARITY_AXIS_LABEL.to_string(),
            y_label: INDEPENDENCE_AXIS_LABEL.to_string(),
            x: points.iter().map(|p| p.threshold * 100.0).collect(),
            y: points.iter().map(|p| p.mean_independence * 100.0).collect(),
        }
    }
}

/// Reduction pipeline bound to a configuration and a similarity scorer.
#[derive(Debug, Clone)]
pub struct Pipeline<S = SequenceRatio> {
    config: LabelfoldConfig,
    scorer: S,
}

impl Pipeline<SequenceRatio> {
    /// Create a pipeline using the scorer described by `config`.
    pub fn new(config: LabelfoldConfig) -> Result<Self> {
        let scorer = SequenceRatio::from_config(&config.similarity);
        Self::with_scorer(config, scorer)
    }

    /// Pipeline with default configuration and scorer.
    pub fn with_defaults() -> Self {
        Self {
            config: LabelfoldConfig::default(),
            scorer: SequenceRatio::default(),
        }
    }
}

impl Default for Pipeline<SequenceRatio> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<S: LabelSimilarity> Pipeline<S> {
    /// Create a pipeline with a custom scorer.
    pub fn with_scorer(config: LabelfoldConfig, scorer: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, scorer })
    }

    /// Configuration in use.
    pub fn config(&self) -> &LabelfoldConfig {
        &self.config
    }

    /// Run with the configured threshold and level count.
    pub fn run<L: AsRef<str>>(&self, labels: &[L]) -> PipelineRun {
        self.run_with(
            labels,
            self.config.reduction.threshold,
            self.config.reduction.levels,
        )
    }

    /// Run with an explicit threshold and level count.
    pub fn run_with<L: AsRef<str>>(
        &self,
        labels: &[L],
        threshold: f64,
        levels: usize,
    ) -> PipelineRun {
        let start = Instant::now();
        let timestamp = Utc::now();

        let mut current: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        if current.is_empty() {
            warn!("Reduction pipeline started with no labels");
        }

        let mut trajectory = vec![current.len()];
        let mut reports = Vec::with_capacity(levels);

        for level in 1..=levels {
            let report = self.reduce_level(level, &current, threshold);
            trajectory.push(report.labels.len());
            info!(
                level,
                threshold,
                labels_in = current.len(),
                labels_out = report.labels.len(),
                "Completed reduction level"
            );
            debug!(level, labels = ?report.labels, "Reduced labels");
            current = report.labels.clone();
            reports.push(report);
        }

        let independence = label_independence(&current);
        let mean = mean_independence(&current);
        info!(
            trajectory = ?trajectory,
            mean_independence = mean,
            "Reduction pipeline finished"
        );

        PipelineRun {
            run_id: Uuid::new_v4().to_string(),
            timestamp,
            processing_time: start.elapsed().as_secs_f64(),
            threshold,
            final_labels: current,
            trajectory,
            mean_independence: mean,
            independence,
            levels: reports,
        }
    }

    /// Run a single level over `labels`.
    pub fn reduce_level(&self, level: usize, labels: &[String], threshold: f64) -> LevelReport {
        let matrix = SimilarityMatrix::build(labels, &self.scorer);
        let extraction = extract_groups(&matrix, threshold);
        let reduced = reduce_labels(&extraction, self.config.reduction.drop_empty);

        LevelReport {
            level,
            matrix,
            extraction,
            labels: reduced,
        }
    }

    /// Run one level per threshold, in order, and score each result.
    pub fn sweep<L: AsRef<str>>(&self, labels: &[L], thresholds: &[f64]) -> Vec<SweepPoint> {
        thresholds
            .iter()
            .map(|&threshold| {
                let run = self.run_with(labels, threshold, 1);
                let point = SweepPoint {
                    threshold,
                    trajectory: run.trajectory,
                    mean_independence: round_to_hundredths(run.mean_independence),
                };
                info!(
                    threshold,
                    features = point.feature_count(),
                    mean_independence = point.mean_independence,
                    "Sweep point"
                );
                point
            })
            .collect()
    }

    /// Sweep the configured thresholds.
    pub fn sweep_configured<L: AsRef<str>>(&self, labels: &[L]) -> Vec<SweepPoint> {
        self.sweep(labels, &self.config.sweep.thresholds)
    }
}

/// Reduce `labels` over `levels` rounds with the default scorer.
///
/// Returns the final labels, the label-count trajectory and the mean
/// independence of the final labels.
pub fn run<L: AsRef<str>>(
    labels: &[L],
    threshold: f64,
    levels: usize,
) -> (Vec<String>, Vec<usize>, f64) {
    let outcome = Pipeline::with_defaults().run_with(labels, threshold, levels);
    (outcome.final_labels, outcome.trajectory, outcome.mean_independence)
}

/// Mean independence after one reduction level at each threshold, rounded
/// to two decimals.
pub fn sweep<L: AsRef<str>>(labels: &[L], thresholds: &[f64]) -> Vec<f64> {
    Pipeline::with_defaults()
        .sweep(labels, thresholds)
        .into_iter()
        .map(|point| point.mean_independence)
        .collect()
}
