//! Report rendering for pipeline runs, sweeps and similarity matrices.
//!
//! JSON and YAML are produced straight from the serializable result types.
//! CSV is available for the tabular exports (matrix heatmap data and sweep
//! series). Plain-text rendering belongs to the CLI.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::config::OutputFormat;
use crate::core::errors::{LabelfoldError, Result};
use crate::core::matrix::SimilarityMatrix;
use crate::core::pipeline::{PipelineRun, SweepPoint, SweepSeries};

/// Sweep output bundling the raw points with their plotting series.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// One entry per threshold, in sweep order
    pub points: Vec<SweepPoint>,
    /// The same data in percent, with axis labels
    pub series: SweepSeries,
}

impl SweepReport {
    /// Build a report from sweep points.
    pub fn new(points: Vec<SweepPoint>) -> Self {
        let series = SweepSeries::from_points(&points);
        Self { points, series }
    }
}

/// Render a pipeline run. Only JSON and YAML are supported.
pub fn render_run(run: &PipelineRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(run),
        OutputFormat::Yaml => to_yaml(run),
        other => Err(unsupported(other, "reduce")),
    }
}

/// Render a sweep report.
pub fn render_sweep(report: &SweepReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
        OutputFormat::Csv => Ok(series_csv(&report.series)),
        other => Err(unsupported(other, "sweep")),
    }
}

/// Render a similarity matrix.
pub fn render_matrix(matrix: &SimilarityMatrix, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(matrix),
        OutputFormat::Yaml => to_yaml(matrix),
        OutputFormat::Csv => Ok(matrix_csv(matrix)),
        other => Err(unsupported(other, "matrix")),
    }
}

/// Matrix as CSV: a header of labels, then one row per label.
pub fn matrix_csv(matrix: &SimilarityMatrix) -> String {
    let mut content = String::from("\"\"");
    for label in matrix.labels() {
        content.push_str(&format!(",\"{}\"", escape_csv(label)));
    }
    content.push('\n');

    for (label, row) in matrix.rows() {
        content.push_str(&format!("\"{}\"", escape_csv(label)));
        for score in row {
            content.push_str(&format!(",{score}"));
        }
        content.push('\n');
    }

    content
}

/// Sweep series as two CSV columns headed by the axis labels.
pub fn series_csv(series: &SweepSeries) -> String {
    let mut content = format!(
        "\"{}\",\"{}\"\n",
        escape_csv(&series.x_label),
        escape_csv(&series.y_label)
    );
    for (x, y) in series.x.iter().zip(&series.y) {
        content.push_str(&format!("{x},{y}\n"));
    }
    content
}

/// Write rendered content to `path`.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        LabelfoldError::io(format!("Failed to write report: {}", path.display()), e)
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

fn unsupported(format: OutputFormat, command: &str) -> LabelfoldError {
    LabelfoldError::config_field(
        format!("{format:?} output is not available for {command} reports"),
        "output.format",
    )
}

/// Escapes double quotes in a string for CSV format.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::Pipeline;
    use crate::detectors::similarity::SequenceRatio;
    use tempfile::tempdir;

    fn survey() -> Vec<String> {
        ["Customer Age", "Customer Age (years)", "Region"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn matrix_csv_has_header_and_rows() {
        let matrix = SimilarityMatrix::build(&survey(), &SequenceRatio::default());
        let csv = matrix_csv(&matrix);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "\"\",\"Customer Age\",\"Customer Age (years)\",\"Region\""
        );
        assert!(lines[1].starts_with("\"Customer Age\",1,0.75,"));
    }

    #[test]
    fn csv_quotes_are_doubled() {
        let labels = vec!["Size \"XL\"".to_string()];
        let matrix = SimilarityMatrix::build(&labels, &SequenceRatio::default());
        assert!(matrix_csv(&matrix).contains("\"Size \"\"XL\"\"\""));
    }

    #[test]
    fn series_csv_uses_axis_labels() {
        let points = Pipeline::with_defaults().sweep(&survey(), &[0.5]);
        let csv = series_csv(&SweepSeries::from_points(&points));
        assert_eq!(
            csv,
            "\"Similarity (%)\",\"Mean independence of values (%)\"\n50,100\n"
        );
    }

    #[test]
    fn run_renders_as_json() {
        let run = Pipeline::with_defaults().run_with(&survey(), 0.5, 1);
        let json = render_run(&run, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["final_labels"], serde_json::json!(["Region", "Customer Age"]));
        assert_eq!(value["trajectory"], serde_json::json!([3, 2]));
        assert_eq!(value["levels"][0]["matrix"]["labels"][2], "Region");
    }

    #[test]
    fn empty_run_serializes_nan_as_null() {
        let run = Pipeline::with_defaults().run_with::<&str>(&[], 0.8, 1);
        let json = render_run(&run, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["mean_independence"].is_null());
    }

    #[test]
    fn sweep_renders_as_yaml() {
        let points = Pipeline::with_defaults().sweep(&survey(), &[0.5, 0.9]);
        let yaml = render_sweep(&SweepReport::new(points), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("x_label: Similarity (%)"));
        assert!(yaml.contains("mean_independence: 0.83"));
    }

    #[test]
    fn csv_run_report_is_rejected() {
        let run = Pipeline::with_defaults().run_with(&survey(), 0.5, 1);
        let err = render_run(&run, OutputFormat::Csv).unwrap_err();
        assert!(matches!(err, LabelfoldError::Config { .. }));
        assert!(render_matrix(&run.levels[0].matrix, OutputFormat::Text).is_err());
    }

    #[test]
    fn report_is_written_to_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("matrix.csv");
        write_report(&path, "a,b\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");

        let missing = dir.path().join("missing").join("out.csv");
        assert!(matches!(
            write_report(&missing, "x"),
            Err(LabelfoldError::Io { .. })
        ));
    }
}
