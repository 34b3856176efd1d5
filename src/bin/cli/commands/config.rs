//! Configuration management commands.
//!
//! This module contains commands for managing labelfold configuration files,
//! including initialization, validation, and printing defaults.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use labelfold_rs::core::config::LabelfoldConfig;

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_builder::load_configuration;

/// Row type for configuration tables.
#[derive(Tabled)]
struct SettingRow {
    setting: String,
    value: String,
}

/// Print default configuration in YAML format
pub async fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default labelfold configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and customize as needed".dimmed()
    );
    println!(
        "{}",
        "# Usage: labelfold reduce --config your-config.yml <labels>".dimmed()
    );
    println!();

    let config = LabelfoldConfig::default();
    let yaml_output = serde_yaml::to_string(&config)?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub async fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    let config = LabelfoldConfig::default();
    let yaml_content = serde_yaml::to_string(&config)?;
    tokio::fs::write(&args.output, yaml_content).await?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Edit the configuration file to tune grouping and output");
    println!(
        "   2. Run a reduction with: {}",
        format!("labelfold reduce --config {} <labels>", args.output.display()).cyan()
    );

    println!();
    println!(
        "{}",
        "🔧 Key settings you can customize:".bright_blue().bold()
    );

    let rows = vec![
        SettingRow {
            setting: "reduction.threshold".to_string(),
            value: "Similarity a pair must exceed to be grouped (default: 0.8)".to_string(),
        },
        SettingRow {
            setting: "reduction.levels".to_string(),
            value: "Number of chained reduction levels (default: 1)".to_string(),
        },
        SettingRow {
            setting: "reduction.drop_empty".to_string(),
            value: "Discard groups that share no text (default: false)".to_string(),
        },
        SettingRow {
            setting: "sweep.thresholds".to_string(),
            value: "Thresholds compared by the sweep command".to_string(),
        },
        SettingRow {
            setting: "similarity.autojunk".to_string(),
            value: "Ignore very frequent characters in long labels (default: true)".to_string(),
        },
        SettingRow {
            setting: "output.format".to_string(),
            value: "text, json, yaml or csv (default: text)".to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);

    Ok(())
}

/// Validate a labelfold configuration file
pub async fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let loaded = load_configuration(Some(&args.config))
        .await
        .and_then(|config| {
            config.validate()?;
            Ok(config)
        });

    let config = match loaded {
        Ok(config) => {
            println!(
                "{}",
                "✅ Configuration file is valid!".bright_green().bold()
            );
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • Thresholds must be finite numbers");
            println!("   • Levels must not exceed {}", labelfold_rs::core::config::MAX_LEVELS);
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'labelfold print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    display_config_summary(&config);
    Ok(())
}

fn display_config_summary(config: &LabelfoldConfig) {
    let thresholds: Vec<String> = config
        .sweep
        .thresholds
        .iter()
        .map(|t| t.to_string())
        .collect();

    let rows = vec![
        SettingRow {
            setting: "Threshold".to_string(),
            value: config.reduction.threshold.to_string(),
        },
        SettingRow {
            setting: "Levels".to_string(),
            value: config.reduction.levels.to_string(),
        },
        SettingRow {
            setting: "Drop Empty Reductions".to_string(),
            value: config.reduction.drop_empty.to_string(),
        },
        SettingRow {
            setting: "Sweep Thresholds".to_string(),
            value: thresholds.join(", "),
        },
        SettingRow {
            setting: "Autojunk".to_string(),
            value: config.similarity.autojunk.to_string(),
        },
        SettingRow {
            setting: "Output Format".to_string(),
            value: format!("{:?}", config.output.format).to_lowercase(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}
