//! Link rewriting
//!
//! This module builds the blob/tree link patterns for a repository and
//! applies them to documentation files on disk.

pub mod patterns;
pub mod rewriter;

// Re-export commonly used items
pub use patterns::UrlPatterns;
pub use rewriter::{ContentRewriter, FileRewriter, process_files};
