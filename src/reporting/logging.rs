use crate::config::Config;
use crate::core::types::{FileOutcome, RunSummary};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A second initialization in the same process keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the identifier tuple of the run
pub fn log_run_config(config: &Config) {
    info!(
        "Configuration: repo={}, source_branch={}, target_branch={}",
        config.repo, config.source_branch, config.target_branch
    );
    info!(
        "Inputs: readme={}, wiki_dir={}",
        config.readme_path().display(),
        config.wiki_dir().display()
    );
}

/// Log file processing information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Processing {file_count} file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log the outcome of a single file for debugging
pub fn log_file_outcome(path: &Path, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Updated => debug!("✓ {} -> updated", path.display()),
        FileOutcome::Unchanged => debug!("- {} -> unchanged", path.display()),
        FileOutcome::Failed { message } => {
            error!("Error processing file {}: {message}", path.display())
        }
    }
}

/// Log run completion
pub fn log_summary(summary: &RunSummary) {
    if summary.failed == 0 {
        info!(
            "Rewrite complete: {}/{} file(s) updated",
            summary.updated, summary.processed
        );
    } else {
        warn!(
            "Rewrite complete: {}/{} file(s) updated, {} file(s) failed",
            summary.updated, summary.processed, summary.failed
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
