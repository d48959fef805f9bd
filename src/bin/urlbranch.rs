use clap::Parser;
use urlbranch::config::{Config, OutputSettings};
use urlbranch::core::types::{FileOutcome, RunSummary};
use urlbranch::discovery::{SourceFiles, collect_sources};
use urlbranch::reporting::logging;
use urlbranch::rewrite::{FileRewriter, process_files};
use urlbranch::ui::output;
use urlbranch::ui::{Cli, cli_to_config, cli_to_output_settings};

use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match run_urlbranch_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main rewrite logic extracted from main() for testing
pub async fn run_urlbranch_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let output_settings = cli_to_output_settings(cli);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    let config = cli_to_config(cli).inspect_err(|e| {
        logging::log_error("Invalid arguments", Some(e));
    })?;
    logging::log_run_config(&config);

    if output_settings.should_show_progress() {
        output::display_run_header(&config);
    }

    let sources = resolve_sources(&config);
    let summary = rewrite_sources(&config, &sources, &output_settings).await?;

    logging::log_summary(&summary);
    output::display_summary(&summary, &output_settings.output_format)?;

    Ok(0)
}

/// Discover wiki files and the README, reporting skipped inputs
pub fn resolve_sources(config: &Config) -> SourceFiles {
    let sources = collect_sources(config);

    for warning in &sources.warnings {
        logging::log_warning(warning);
        output::display_warning(warning);
    }

    logging::log_file_info(sources.files.len(), &sources.files);
    sources
}

/// Rewrite every source file in order
pub async fn rewrite_sources(
    config: &Config,
    sources: &SourceFiles,
    output_settings: &OutputSettings,
) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let rewriter = FileRewriter::new(config)?;

    let summary = process_files(&rewriter, &sources.files, |path, outcome| {
        report_file_outcome(path, outcome, output_settings);
    })
    .await;

    Ok(summary)
}

/// Per-file progress: updates on stdout, failures on stderr
pub fn report_file_outcome(path: &Path, outcome: &FileOutcome, output_settings: &OutputSettings) {
    logging::log_file_outcome(path, outcome);

    match outcome {
        FileOutcome::Updated if output_settings.should_show_progress() => {
            output::display_file_updated(path)
        }
        FileOutcome::Failed { message } => output::display_file_error(path, message),
        _ => {}
    }
}
