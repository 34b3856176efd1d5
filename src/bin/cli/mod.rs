//! CLI Module Organization
//!
//! This module organizes the CLI functionality into cohesive sub-modules:
//! - args: CLI argument structures and configuration types
//! - commands: Command execution logic
//! - config_builder: Configuration loading and flag overrides
//! - output: Text rendering and report output

pub mod args;
pub mod commands;
pub mod config_builder;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
