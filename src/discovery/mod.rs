//! Documentation file discovery
//!
//! This module walks the wiki directory for documentation files and
//! resolves the run's inputs into a single file list.

pub mod path_utils;
pub mod sources;

// Re-export commonly used items
pub use path_utils::{find_doc_files, is_doc_file};
pub use sources::{SourceFiles, collect_sources};
