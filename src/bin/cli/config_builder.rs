//! Configuration loading and CLI override merging.

use std::path::Path;

use labelfold_rs::core::config::{LabelfoldConfig, OutputFormat as ReportFormat, SweepConfig};
use labelfold_rs::io::labels::{parse_labels, LabelFormat};

use crate::cli::args::{OutputFormat, ReduceArgs, SweepArgs};

/// Load configuration from a YAML file, or defaults when no path is given.
pub async fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<LabelfoldConfig> {
    let config = match config_path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                anyhow::anyhow!("Failed to read configuration {}: {}", path.display(), e)
            })?;
            LabelfoldConfig::from_yaml_str(&content)?
        }
        None => LabelfoldConfig::default(),
    };

    Ok(config)
}

/// Load a label file, choosing the parser from its extension.
pub async fn load_labels(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read labels {}: {}", path.display(), e))?;
    let labels = parse_labels(&content, LabelFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), count = labels.len(), "Loaded labels");
    Ok(labels)
}

/// Configuration for `reduce`, with command-line flags taking precedence.
pub async fn build_reduce_config(args: &ReduceArgs) -> anyhow::Result<LabelfoldConfig> {
    let mut config = load_configuration(args.config.as_deref()).await?;

    if let Some(threshold) = args.threshold {
        config.reduction.threshold = threshold;
    }
    if let Some(levels) = args.levels {
        config.reduction.levels = levels;
    }
    if args.drop_empty {
        config.reduction.drop_empty = true;
    }
    apply_format(&mut config, args.format);

    config.validate()?;
    Ok(config)
}

/// Configuration for `sweep`, with command-line flags taking precedence.
pub async fn build_sweep_config(args: &SweepArgs) -> anyhow::Result<LabelfoldConfig> {
    let mut config = load_configuration(args.config.as_deref()).await?;

    if let Some(list) = &args.thresholds {
        config.sweep.thresholds = SweepConfig::parse_thresholds(list)?;
    }
    apply_format(&mut config, args.format);

    config.validate()?;
    Ok(config)
}

/// Configuration for commands that only take `--config` and `--format`.
pub async fn build_basic_config(
    config_path: Option<&Path>,
    format: Option<OutputFormat>,
) -> anyhow::Result<LabelfoldConfig> {
    let mut config = load_configuration(config_path).await?;
    apply_format(&mut config, format);
    config.validate()?;
    Ok(config)
}

fn apply_format(config: &mut LabelfoldConfig, format: Option<OutputFormat>) {
    if let Some(format) = format {
        config.output.format = ReportFormat::from(format);
    }
}
