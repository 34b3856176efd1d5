//! Substitution of reduced labels into JSON records.

use owo_colors::OwoColorize;
use serde_json::Value;

use labelfold_rs::io::substitution::{stripped_column, substitute_column};

use crate::cli::args::SubstituteArgs;
use crate::cli::config_builder::load_labels;
use crate::cli::output::emit;

/// Add a `<column>_stripped` column to every record.
pub async fn substitute_command(args: SubstituteArgs) -> anyhow::Result<()> {
    let reduced = load_labels(&args.reduced).await?;

    let content = tokio::fs::read_to_string(&args.records).await.map_err(|e| {
        anyhow::anyhow!("Failed to read records {}: {}", args.records.display(), e)
    })?;
    let mut records: Vec<Value> = serde_json::from_str(&content)?;

    substitute_column(&mut records, &args.column, &reduced)?;

    eprintln!(
        "{} {} records, column {}",
        "🔁 Substituted:".bright_green().bold(),
        records.len(),
        stripped_column(&args.column).cyan()
    );

    let output = serde_json::to_string_pretty(&records)?;
    emit(&output, args.out.as_deref()).await
}
