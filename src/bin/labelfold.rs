//! Labelfold CLI - near-duplicate label reduction
//!
//! Reduces label files, sweeps thresholds, exports similarity matrices and
//! substitutes reduced labels back into JSON records.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Reduce(args) => {
            cli::reduce_command(args).await?;
        }
        Commands::Sweep(args) => {
            cli::sweep_command(args).await?;
        }
        Commands::Matrix(args) => {
            cli::matrix_command(args).await?;
        }
        Commands::Substitute(args) => {
            cli::substitute_command(args).await?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config().await?;
        }
        Commands::InitConfig(args) => {
            cli::init_config(args).await?;
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args).await?;
        }
    }

    Ok(())
}
