//! urlbranch - retarget GitHub blob/tree links in documentation to another branch
//!
//! This library is organized into focused modules:
//! - `core`: Fundamental types, errors, and constants
//! - `config`: Run configuration built from the command line
//! - `discovery`: Documentation file discovery
//! - `rewrite`: Link patterns and in-place file rewriting
//! - `ui`: CLI and terminal output
//! - `reporting`: Structured logging

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod rewrite;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{Config, OutputSettings};
pub use crate::core::{FileOutcome, Result, RunSummary, UrlBranchError};
pub use discovery::{collect_sources, find_doc_files};
pub use rewrite::{ContentRewriter, FileRewriter, UrlPatterns, process_files};
