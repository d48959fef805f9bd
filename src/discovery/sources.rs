use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discovery::path_utils::find_doc_files;

/// What a stat of an input path turned up.
#[derive(Debug)]
pub enum InputStatus {
    Directory,
    File,
    /// Exists, but is neither a directory nor a regular file
    Other,
    Missing,
    /// Exists or might exist, but could not be inspected
    Inaccessible(io::Error),
}

/// Stat `path`, following symbolic links.
pub fn inspect_path(path: &Path) -> InputStatus {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => InputStatus::Directory,
        Ok(meta) if meta.is_file() => InputStatus::File,
        Ok(_) => InputStatus::Other,
        Err(err) if err.kind() == io::ErrorKind::NotFound => InputStatus::Missing,
        Err(err) => InputStatus::Inaccessible(err),
    }
}

/// Files to process plus the reasons any input was skipped.
#[derive(Debug, Default)]
pub struct SourceFiles {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Build the file list for a run: documentation files under the wiki
/// directory followed by the README.
///
/// Missing, mistyped or unreadable inputs are skipped with a warning. A wiki
/// directory that cannot be fully walked contributes no files at all.
pub fn collect_sources(config: &Config) -> SourceFiles {
    let mut sources = SourceFiles::default();
    let wiki = config.wiki_dir();
    let readme = config.readme_path();

    match inspect_path(wiki) {
        InputStatus::Directory => match find_doc_files(wiki) {
            Ok(files) => sources.files = files,
            Err(err) => sources.warnings.push(format!(
                "Could not walk wiki path {} ({err}). Skipping wiki files.",
                wiki.display()
            )),
        },
        InputStatus::File | InputStatus::Other => sources.warnings.push(format!(
            "Wiki path is not a directory: {}. Skipping wiki files.",
            wiki.display()
        )),
        InputStatus::Missing => sources.warnings.push(format!(
            "Wiki path not found: {}. Skipping wiki files.",
            wiki.display()
        )),
        InputStatus::Inaccessible(err) => sources.warnings.push(format!(
            "Could not access wiki path {} ({err}). Skipping wiki files.",
            wiki.display()
        )),
    }

    match inspect_path(readme) {
        InputStatus::File => sources.files.push(readme.to_path_buf()),
        InputStatus::Directory | InputStatus::Other => sources.warnings.push(format!(
            "README path is not a file: {}. Skipping README.",
            readme.display()
        )),
        InputStatus::Missing => sources.warnings.push(format!(
            "README not found: {}. Skipping README.",
            readme.display()
        )),
        InputStatus::Inaccessible(err) => sources.warnings.push(format!(
            "Could not access README {} ({err}). Skipping README.",
            readme.display()
        )),
    }

    sources
}
