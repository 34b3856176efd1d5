//! Reduction commands: reduce, sweep and matrix export.

use labelfold_rs::core::config::OutputFormat as ReportFormat;
use labelfold_rs::core::matrix::SimilarityMatrix;
use labelfold_rs::detectors::similarity::SequenceRatio;
use labelfold_rs::io::reports::{render_matrix, render_run, render_sweep, SweepReport};
use labelfold_rs::Pipeline;

use crate::cli::args::{MatrixArgs, ReduceArgs, SweepArgs};
use crate::cli::config_builder::{
    build_basic_config, build_reduce_config, build_sweep_config, load_labels,
};
use crate::cli::output::{emit, render_matrix_text, render_run_text, render_sweep_text};

/// Reduce a label file over the configured levels.
pub async fn reduce_command(args: ReduceArgs) -> anyhow::Result<()> {
    let config = build_reduce_config(&args).await?;
    let labels = load_labels(&args.input).await?;
    let format = config.output.format;

    let pipeline = Pipeline::new(config)?;
    let run = pipeline.run(&labels);

    let content = match format {
        ReportFormat::Text => render_run_text(&run),
        other => render_run(&run, other)?,
    };
    emit(&content, args.out.as_deref()).await
}

/// Run one reduction level per threshold.
pub async fn sweep_command(args: SweepArgs) -> anyhow::Result<()> {
    let config = build_sweep_config(&args).await?;
    let labels = load_labels(&args.input).await?;
    let format = config.output.format;

    let pipeline = Pipeline::new(config)?;
    let points = pipeline.sweep_configured(&labels);

    let content = match format {
        ReportFormat::Text => render_sweep_text(&points),
        other => render_sweep(&SweepReport::new(points), other)?,
    };
    emit(&content, args.out.as_deref()).await
}

/// Export the similarity matrix of a label file.
pub async fn matrix_command(args: MatrixArgs) -> anyhow::Result<()> {
    let config = build_basic_config(args.config.as_deref(), args.format).await?;
    let labels = load_labels(&args.input).await?;

    let scorer = SequenceRatio::from_config(&config.similarity);
    let matrix = SimilarityMatrix::build(&labels, &scorer);

    let content = match config.output.format {
        ReportFormat::Text => render_matrix_text(&matrix),
        other => render_matrix(&matrix, other)?,
    };
    emit(&content, args.out.as_deref()).await
}
