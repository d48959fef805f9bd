use async_trait::async_trait;

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::{FileOutcome, RunSummary};
use crate::rewrite::patterns::UrlPatterns;

#[async_trait]
pub trait ContentRewriter {
    /// Rewrite links in one file. Failures are reported in the outcome and
    /// never propagated.
    async fn rewrite_file(&self, path: &Path) -> FileOutcome;
}

/// Rewrites links in place on disk.
#[derive(Debug, Clone)]
pub struct FileRewriter {
    patterns: UrlPatterns,
}

impl FileRewriter {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            patterns: UrlPatterns::from_config(config)?,
        })
    }

    pub fn patterns(&self) -> &UrlPatterns {
        &self.patterns
    }

    async fn try_rewrite(&self, path: &Path) -> io::Result<bool> {
        let content = tokio::fs::read_to_string(path).await?;

        let updated = self.patterns.apply(&content);
        if updated == content.as_str() {
            return Ok(false);
        }

        tokio::fs::write(path, updated.as_bytes()).await?;
        Ok(true)
    }
}

#[async_trait]
impl ContentRewriter for FileRewriter {
    async fn rewrite_file(&self, path: &Path) -> FileOutcome {
        match self.try_rewrite(path).await {
            Ok(true) => FileOutcome::Updated,
            Ok(false) => FileOutcome::Unchanged,
            Err(err) => FileOutcome::Failed {
                message: err.to_string(),
            },
        }
    }
}

/// Run `rewriter` over `files` one at a time, handing each outcome to
/// `on_outcome` as soon as it is known.
pub async fn process_files<R, F>(rewriter: &R, files: &[PathBuf], mut on_outcome: F) -> RunSummary
where
    R: ContentRewriter + ?Sized,
    F: FnMut(&Path, &FileOutcome),
{
    let mut summary = RunSummary::default();

    for path in files {
        let outcome = rewriter.rewrite_file(path).await;
        on_outcome(path, &outcome);
        summary.record(path, &outcome);
    }

    summary
}
