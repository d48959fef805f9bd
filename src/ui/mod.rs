//! User interface and interaction
//!
//! This module contains CLI parsing, colored terminal output and the
//! formatting of progress lines and the run summary.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config, cli_to_output_settings};
