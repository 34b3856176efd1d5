//! CLI Command Implementations
//!
//! - reduce: reduction, threshold sweep and matrix export
//! - substitute: reduced label substitution into JSON records
//! - config: configuration management commands

pub mod config;
pub mod reduce;
pub mod substitute;

pub use config::{init_config, print_default_config, validate_config};
pub use reduce::{matrix_command, reduce_command, sweep_command};
pub use substitute::substitute_command;
