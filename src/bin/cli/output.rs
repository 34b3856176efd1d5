//! Output Formatting and Display Functions
//!
//! Text rendering of reduction runs, sweeps and matrices with tabled tables,
//! plus the shared writer that sends a rendered report to stdout or a file.

use std::path::Path;

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use labelfold_rs::core::matrix::SimilarityMatrix;
use labelfold_rs::core::pipeline::{PipelineRun, SweepPoint};

/// Send rendered content to `out`, or print it when no path is given.
pub async fn emit(content: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, content).await?;
            eprintln!(
                "{} {}",
                "📄 Report written to:".bright_green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

/// Format an independence value for display; empty sets show as `n/a`.
pub fn format_independence(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Render a reduction run as text tables.
pub fn render_run_text(run: &PipelineRun) -> String {
    /// Row for the reduced label table.
    #[derive(Tabled)]
    struct LabelRow {
        #[tabled(rename = "Label")]
        label: String,
        #[tabled(rename = "Independent of")]
        independent: String,
        #[tabled(rename = "Score")]
        score: String,
    }

    /// Row for the per-level summary table.
    #[derive(Tabled)]
    struct LevelRow {
        #[tabled(rename = "Level")]
        level: usize,
        #[tabled(rename = "Labels in")]
        labels_in: usize,
        #[tabled(rename = "Groups")]
        groups: usize,
        #[tabled(rename = "Labels out")]
        labels_out: usize,
    }

    let mut content = String::new();
    content.push_str(&format!(
        "{} threshold {:.2}, {} level(s)\n",
        "🔍 Label reduction:".bright_blue().bold(),
        run.threshold,
        run.levels.len()
    ));

    if !run.levels.is_empty() {
        let level_rows: Vec<LevelRow> = run
            .levels
            .iter()
            .map(|level| LevelRow {
                level: level.level,
                labels_in: level.matrix.len(),
                groups: level.extraction.group_count(),
                labels_out: level.labels.len(),
            })
            .collect();
        let mut table = Table::new(level_rows);
        table.with(TableStyle::rounded());
        content.push_str(&format!("{}\n", table));
    }

    let label_rows: Vec<LabelRow> = run
        .independence
        .iter()
        .map(|entry| LabelRow {
            label: entry.label.clone(),
            independent: format!("{}/{}", entry.independent, entry.others),
            score: format_independence(entry.score),
        })
        .collect();
    if label_rows.is_empty() {
        content.push_str(&format!("{}\n", "No labels remain".dimmed()));
    } else {
        let mut table = Table::new(label_rows);
        table.with(TableStyle::rounded());
        content.push_str(&format!("{}\n", table));
    }

    let trajectory: Vec<String> = run.trajectory.iter().map(ToString::to_string).collect();
    content.push_str(&format!(
        "{} {}\n",
        "📉 Label counts:".bright_blue().bold(),
        trajectory.join(" → ")
    ));
    content.push_str(&format!(
        "{} {}\n",
        "📊 Mean independence:".bright_blue().bold(),
        format_independence(run.mean_independence).bright_green()
    ));

    content
}

/// Render sweep points as a text table.
pub fn render_sweep_text(points: &[SweepPoint]) -> String {
    /// Row for the sweep table.
    #[derive(Tabled)]
    struct SweepRow {
        #[tabled(rename = "Similarity (%)")]
        similarity: String,
        #[tabled(rename = "Labels")]
        labels: String,
        #[tabled(rename = "Mean independence")]
        independence: String,
    }

    let rows: Vec<SweepRow> = points
        .iter()
        .map(|point| SweepRow {
            similarity: format!("{:.0}", point.threshold * 100.0),
            labels: point
                .trajectory
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" → "),
            independence: format_independence(point.mean_independence),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());

    let best = points
        .iter()
        .filter(|point| !point.mean_independence.is_nan())
        .max_by(|a, b| a.mean_independence.total_cmp(&b.mean_independence));

    let mut content = format!("{}\n{}\n", "📈 Threshold sweep".bright_blue().bold(), table);
    if let Some(best) = best {
        content.push_str(&format!(
            "{} {:.0}% ({} labels, independence {})\n",
            "🏆 Most independent at:".bright_green().bold(),
            best.threshold * 100.0,
            best.feature_count(),
            format_independence(best.mean_independence)
        ));
    }
    content
}

/// Render a similarity matrix as a labelled grid.
pub fn render_matrix_text(matrix: &SimilarityMatrix) -> String {
    if matrix.is_empty() {
        return format!("{}\n", "Empty label set".dimmed());
    }

    let mut header = vec![String::new()];
    header.extend(matrix.labels().iter().cloned());

    let mut records = vec![header];
    for (label, row) in matrix.rows() {
        let mut record = vec![label.to_string()];
        record.extend(row.iter().map(|score| format!("{:.2}", score)));
        records.push(record);
    }

    let mut table = Table::from_iter(records);
    table.with(TableStyle::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelfold_rs::Pipeline;

    #[test]
    fn nan_independence_is_shown_as_na() {
        assert_eq!(format_independence(f64::NAN), "n/a");
        assert_eq!(format_independence(0.8333), "0.83");
    }

    #[test]
    fn run_text_lists_final_labels() {
        let run = Pipeline::with_defaults().run_with(
            &["Customer Age", "Customer Age (years)", "Region"],
            0.5,
            1,
        );
        let text = render_run_text(&run);
        assert!(text.contains("Customer Age"));
        assert!(text.contains("Region"));
        assert!(text.contains("1.00"));
    }

    #[test]
    fn matrix_text_has_scores() {
        let labels = vec!["Age".to_string(), "Age in years".to_string()];
        let matrix = SimilarityMatrix::build(&labels, &labelfold_rs::SequenceRatio::default());
        let text = render_matrix_text(&matrix);
        assert!(text.contains("0.40"));
        assert!(text.contains("1.00"));
    }
}
