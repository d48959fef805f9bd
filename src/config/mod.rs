//! Configuration management
//!
//! This module holds the values parsed once from the command line: the
//! repository/branch tuple that drives the rewrite and the settings that
//! control console output.

use std::path::{Path, PathBuf};

use crate::core::constants::{github, output_formats};
use crate::core::error::{Result, UrlBranchError};

/// Everything a run needs to know about what to rewrite and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository identifier as `owner/name`, without a `.git` suffix
    pub repo: String,

    /// Branch currently embedded in links
    pub source_branch: String,

    /// Branch the links are redirected to
    pub target_branch: String,

    /// Single top-level document processed alongside the wiki
    pub readme_path: PathBuf,

    /// Documentation directory scanned recursively
    pub wiki_dir: PathBuf,
}

impl Config {
    /// Build a config, normalizing the repository identifier.
    ///
    /// Empty repository or branch names are rejected since they would match
    /// malformed links such as `https://github.com//blob/...`.
    pub fn new(
        repo: &str,
        source_branch: &str,
        target_branch: &str,
        readme_path: impl Into<PathBuf>,
        wiki_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let repo = normalize_repo(repo);

        if repo.is_empty() {
            return Err(UrlBranchError::InvalidArgument(
                "repository must be given as <owner>/<repo>".to_string(),
            ));
        }
        if source_branch.is_empty() {
            return Err(UrlBranchError::InvalidArgument(
                "source branch cannot be empty".to_string(),
            ));
        }
        if target_branch.is_empty() {
            return Err(UrlBranchError::InvalidArgument(
                "target branch cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            repo: repo.to_string(),
            source_branch: source_branch.to_string(),
            target_branch: target_branch.to_string(),
            readme_path: readme_path.into(),
            wiki_dir: wiki_dir.into(),
        })
    }

    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    pub fn wiki_dir(&self) -> &Path {
        &self.wiki_dir
    }
}

/// Strip one trailing `.git` (any case) from a repository identifier.
pub fn normalize_repo(repo: &str) -> &str {
    let suffix_len = github::GIT_SUFFIX.len();
    if repo.len() < suffix_len {
        return repo;
    }

    let split_at = repo.len() - suffix_len;
    match repo.get(split_at..) {
        Some(tail) if tail.eq_ignore_ascii_case(github::GIT_SUFFIX) => &repo[..split_at],
        _ => repo,
    }
}

/// Settings for output formatting and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            output_format: output_formats::DEFAULT.to_string(),
        }
    }
}

impl OutputSettings {
    /// Header and per-file progress lines only make sense for text output
    pub fn should_show_progress(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}
