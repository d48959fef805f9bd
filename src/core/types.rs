use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of running the rewriter over a single file.
///
/// A failed file never aborts the run; it is recorded with the error message
/// and counts as unchanged in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back
    Updated,
    /// No link matched, file left untouched
    Unchanged,
    /// Reading or writing the file failed
    Failed { message: String },
}

impl FileOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Failed { message } => write!(f, "failed ({message})"),
        }
    }
}

/// Aggregated counts for a whole run.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use urlbranch::core::types::{FileOutcome, RunSummary};
///
/// let mut summary = RunSummary::default();
/// summary.record(Path::new("wiki/a.md"), &FileOutcome::Updated);
/// summary.record(Path::new("README.md"), &FileOutcome::Unchanged);
/// assert_eq!(summary.processed, 2);
/// assert_eq!(summary.updated, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Files handed to the rewriter
    pub processed: usize,
    /// Files whose content was rewritten
    pub updated: usize,
    /// Files that could not be read or written
    pub failed: usize,
    /// Paths of rewritten files, in processing order
    #[serde(serialize_with = "serialize_paths_lossy")]
    pub updated_files: Vec<PathBuf>,
}

// Non-UTF-8 file names must not fail a run whose files are already rewritten
fn serialize_paths_lossy<S: Serializer>(
    paths: &[PathBuf],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|path| path.to_string_lossy()))
}

impl RunSummary {
    pub fn record(&mut self, path: &Path, outcome: &FileOutcome) {
        self.processed += 1;
        match outcome {
            FileOutcome::Updated => {
                self.updated += 1;
                self.updated_files.push(path.to_path_buf());
            }
            FileOutcome::Failed { .. } => self.failed += 1,
            FileOutcome::Unchanged => {}
        }
    }

    pub fn has_updates(&self) -> bool {
        self.updated > 0
    }
}
