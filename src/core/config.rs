//! Configuration types and management for labelfold-rs.
//!
//! Every section carries `#[serde(default)]` so a YAML file only needs to
//! mention the settings it changes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{LabelfoldError, Result, ResultExt};

pub mod validation;

use validation::{validate_at_most, validate_finite, validate_non_empty};

/// Upper bound on reduction levels accepted from configuration.
pub const MAX_LEVELS: usize = 64;

/// Main configuration for the label reduction engine
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelfoldConfig {
    /// Similarity scorer settings
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Grouping and reduction settings
    #[serde(default)]
    pub reduction: ReductionConfig,

    /// Threshold sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,

    /// Output settings used by the command-line front end
    #[serde(default)]
    pub output: OutputConfig,
}

impl LabelfoldConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            LabelfoldError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            LabelfoldError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.reduction.validate()?;
        self.sweep.validate()?;
        Ok(())
    }
}

/// Similarity scorer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Ignore very frequent characters as match anchors in long labels
    /// (200+ characters)
    pub autojunk: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self { autojunk: true }
    }
}

/// Grouping and common-substring reduction configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReductionConfig {
    /// Similarity a pair must strictly exceed to share a row group
    pub threshold: f64,

    /// Number of successive reduction rounds
    pub levels: usize,

    /// Discard groups whose common substring trims to the empty string
    pub drop_empty: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            levels: 1,
            drop_empty: false,
        }
    }
}

impl ReductionConfig {
    /// Validate reduction configuration.
    ///
    /// Thresholds outside `[0, 1]` are accepted: they produce the
    /// all-grouped and all-singleton degenerate reductions.
    pub fn validate(&self) -> Result<()> {
        validate_finite(self.threshold, "reduction.threshold")?;
        validate_at_most(self.levels, MAX_LEVELS, "reduction.levels")?;
        Ok(())
    }
}

/// Threshold sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepConfig {
    /// Thresholds evaluated in order
    pub thresholds: Vec<f64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            thresholds: vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
        }
    }
}

impl SweepConfig {
    /// Parse a comma-separated threshold list such as `0.1,0.5,0.9`.
    pub fn parse_thresholds(list: &str) -> Result<Vec<f64>> {
        let thresholds = list
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| item.parse::<f64>().context("sweep.thresholds"))
            .collect::<Result<Vec<_>>>()?;

        let sweep = Self { thresholds };
        sweep.validate()?;
        Ok(sweep.thresholds)
    }

    /// Validate sweep configuration
    pub fn validate(&self) -> Result<()> {
        validate_non_empty(&self.thresholds, "sweep.thresholds")?;
        for (idx, threshold) in self.thresholds.iter().enumerate() {
            validate_finite(*threshold, &format!("sweep.thresholds[{idx}]"))?;
        }
        Ok(())
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub format: OutputFormat,
}

/// Report formats understood by the report writers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
    /// Comma separated values (matrix and sweep exports)
    Csv,
}
