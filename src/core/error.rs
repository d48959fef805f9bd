use std::fmt;

/// Error types for urlbranch operations
#[derive(Debug)]
pub enum UrlBranchError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Regex compilation error
    Regex(regex::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// Summary serialization error
    Serialization(String),
}

impl fmt::Display for UrlBranchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlBranchError::Io(err) => write!(f, "IO error: {err}"),
            UrlBranchError::Regex(err) => write!(f, "Regex error: {err}"),
            UrlBranchError::FileWalking(err) => write!(f, "File walking error: {err}"),
            UrlBranchError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            UrlBranchError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for UrlBranchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlBranchError::Io(err) => Some(err),
            UrlBranchError::Regex(err) => Some(err),
            UrlBranchError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlBranchError {
    fn from(err: std::io::Error) -> Self {
        UrlBranchError::Io(err)
    }
}

impl From<regex::Error> for UrlBranchError {
    fn from(err: regex::Error) -> Self {
        UrlBranchError::Regex(err)
    }
}

impl From<ignore::Error> for UrlBranchError {
    fn from(err: ignore::Error) -> Self {
        UrlBranchError::FileWalking(err)
    }
}

/// Type alias for Results using UrlBranchError
pub type Result<T> = std::result::Result<T, UrlBranchError>;
