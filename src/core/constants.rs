/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal strings the rewriter and its console
/// output depend on, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful summary with progress lines
    pub const TEXT: &str = "text";
    /// JSON output format - structured summary for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain summary line only
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Hosting provider URL pieces
pub mod github {
    /// Scheme and host every rewritten link starts with
    pub const URL_PREFIX: &str = "https://github.com/";
    /// Path kind of single-file links
    pub const BLOB: &str = "blob";
    /// Path kind of directory listing links
    pub const TREE: &str = "tree";
    /// Suffix allowed on the repository argument, compared case-insensitively
    pub const GIT_SUFFIX: &str = ".git";
}

/// File processing constants
pub mod files {
    /// File name suffixes treated as documentation, matched case-sensitively
    pub const DOC_EXTENSIONS: [&str; 3] = [".md", ".mdx", ".markdown"];
}

/// User-facing message constants
pub mod messages {
    /// Printed after the summary when at least one file changed
    pub const REPLACED: &str = "GitHub URLs have been successfully replaced.";
    /// Printed after the summary when nothing changed
    pub const NOTHING_REPLACED: &str = "No GitHub URLs were found to replace.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_doc_extensions() {
        assert_eq!(files::DOC_EXTENSIONS, [".md", ".mdx", ".markdown"]);
        assert!(files::DOC_EXTENSIONS.iter().all(|ext| ext.starts_with('.')));
    }

    #[test]
    fn test_github_constants() {
        assert!(github::URL_PREFIX.starts_with("https://"));
        assert!(github::URL_PREFIX.ends_with('/'));
        assert_eq!(github::BLOB, "blob");
        assert_eq!(github::TREE, "tree");
    }
}
