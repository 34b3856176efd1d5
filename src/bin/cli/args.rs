//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the labelfold binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use labelfold_rs::core::config::OutputFormat as ReportFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Near-duplicate label reduction
#[derive(Parser)]
#[command(name = "labelfold")]
#[command(version = VERSION)]
#[command(about = "Labelfold - collapse near-duplicate labels into canonical ones")]
#[command(long_about = "
Collapse near-duplicate labels (survey question titles, column headers,
category names): group similar labels, replace each group with the text its
members share, and score how independent the resulting labels are of one
another.

Label files hold one label per line, or a JSON/YAML list of strings
(chosen by the .json, .yml or .yaml extension).

Common Usage:

  # Reduce labels once at the default threshold
  labelfold reduce titles.txt

  # Two reduction levels at 70% similarity, as JSON
  labelfold reduce titles.txt --threshold 0.7 --levels 2 --format json

  # Compare thresholds and export the plotting series
  labelfold sweep titles.txt --thresholds 0.5,0.6,0.7,0.8 --format csv

  # Export heatmap data
  labelfold matrix titles.txt --format csv --out matrix.csv

  # Add a <column>_stripped column to JSON records
  labelfold substitute records.json --column title --reduced reduced.txt
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reduce a label set over one or more levels
    Reduce(ReduceArgs),

    /// Run one reduction level per threshold and compare independence
    Sweep(SweepArgs),

    /// Export the pairwise similarity matrix of a label set
    Matrix(MatrixArgs),

    /// Substitute reduced labels into a column of JSON records
    Substitute(SubstituteArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a labelfold configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct ReduceArgs {
    /// Label file to reduce
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Similarity a pair must exceed to be grouped [default: 0.8]
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Number of reduction levels [default: 1]
    #[arg(short, long)]
    pub levels: Option<usize>,

    /// Discard groups whose members share no text
    #[arg(long)]
    pub drop_empty: bool,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct SweepArgs {
    /// Label file to sweep
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Comma-separated thresholds [default: 0.1,0.2,...,0.9]
    #[arg(short, long)]
    pub thresholds: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct MatrixArgs {
    /// Label file to score
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct SubstituteArgs {
    /// JSON file holding an array of record objects
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Column whose values are substituted
    #[arg(long, required = true)]
    pub column: String,

    /// Label file with the reduced labels
    #[arg(long, required = true)]
    pub reduced: PathBuf,

    /// Write the records to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".labelfold.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable tables
    Text,
    /// JSON format output
    Json,
    /// YAML format output
    Yaml,
    /// CSV format output (matrix and sweep only)
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Yaml => ReportFormat::Yaml,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}
