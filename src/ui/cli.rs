// Command-line interface definitions and parsing for urlbranch

use crate::config::{Config, OutputSettings};
use crate::core::constants::output_formats;
use crate::core::error::Result;
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository as <owner>/<repo>, optionally ending in .git
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Branch currently referenced by the links
    #[arg(value_name = "SOURCE_BRANCH")]
    pub source_branch: String,

    /// Branch the links should point to
    #[arg(value_name = "TARGET_BRANCH")]
    pub target_branch: String,

    /// Top-level document to rewrite (e.g. README.md)
    #[arg(value_name = "README_PATH")]
    pub readme_path: PathBuf,

    /// Documentation directory to rewrite recursively
    #[arg(value_name = "WIKI_DIR")]
    pub wiki_dir: PathBuf,

    // Output & Verbosity
    /// Suppress the header and per-file progress lines
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Summary format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,
}

/// Build the run configuration from parsed arguments
pub fn cli_to_config(cli: &Cli) -> Result<Config> {
    Config::new(
        &cli.repo,
        &cli.source_branch,
        &cli.target_branch,
        cli.readme_path.clone(),
        cli.wiki_dir.clone(),
    )
}

/// Build output settings from parsed arguments
pub fn cli_to_output_settings(cli: &Cli) -> OutputSettings {
    OutputSettings {
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
    }
}
