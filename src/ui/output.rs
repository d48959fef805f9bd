//! Output formatting and display logic for urlbranch

use serde::Serialize;

use std::path::Path;

use crate::config::Config;
use crate::core::constants::{messages, output_formats};
use crate::core::error::{Result, UrlBranchError};
use crate::core::types::RunSummary;
use crate::ui::color::{Colors, colorize, colorize_stderr};

/// Print what is about to be rewritten
pub fn display_run_header(config: &Config) {
    println!(
        "Replacing GitHub URLs for \"{}\" from \"{}\" to \"{}\"...",
        config.repo, config.source_branch, config.target_branch
    );
    println!(
        "{}: {}",
        colorize("README Path", Colors::CYAN),
        config.readme_path().display()
    );
    println!(
        "{}: {}",
        colorize("Wiki Directory", Colors::CYAN),
        config.wiki_dir().display()
    );
}

pub fn display_file_updated(path: &Path) {
    println!("{} {}", colorize("Updated:", Colors::GREEN), path.display());
}

pub fn display_file_error(path: &Path, message: &str) {
    eprintln!(
        "{}",
        colorize_stderr(
            &format!("Error processing file {}: {}", path.display(), message),
            Colors::RED
        )
    );
}

pub fn display_warning(message: &str) {
    eprintln!("{}", colorize_stderr(message, Colors::YELLOW));
}

/// Print the run summary in the requested format
pub fn display_summary(summary: &RunSummary, output_format: &str) -> Result<()> {
    match output_format {
        output_formats::JSON => println!("{}", format_json_summary(summary)?),
        output_formats::MINIMAL => println!("{}", format_summary_line(summary)),
        _ => {
            println!();
            println!(
                "{}",
                colorize(&format_summary_line(summary), Colors::BOLD)
            );
            println!("{}", format_summary_message(summary));
        }
    }
    Ok(())
}

pub fn format_summary_line(summary: &RunSummary) -> String {
    format!(
        "Processed {} file(s), updated {} file(s).",
        summary.processed, summary.updated
    )
}

pub fn format_summary_message(summary: &RunSummary) -> &'static str {
    if summary.has_updates() {
        messages::REPLACED
    } else {
        messages::NOTHING_REPLACED
    }
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    status: &'static str,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// Render the summary as a single pretty-printed JSON object
pub fn format_json_summary(summary: &RunSummary) -> Result<String> {
    let status = if summary.has_updates() {
        "updated"
    } else {
        "unchanged"
    };

    serde_json::to_string_pretty(&JsonSummary { status, summary })
        .map_err(|e| UrlBranchError::Serialization(e.to_string()))
}
