/// Error types for wordscout.
///
/// Queries separate two failure classes:
///
/// 1. **Traversal failures** (the root is missing or the directory walk breaks)
///    abort the whole query and surface as `SearchError::TraversalError`.
/// 2. **Per-file failures** (a discovered file cannot be opened or decoded) are
///    reported by the processor as `FileNotFound`, `PermissionDenied`,
///    `EncodingError` or `IoError`, logged, and turned into an empty
///    contribution by the aggregators.
///
/// ```rust,ignore
/// match find_unique_words(&config) {
///     Ok(words) => // Print words,
///     Err(SearchError::TraversalError { root, .. }) => // Report unreadable root,
///     Err(e) => // Handle other errors
/// }
/// ```
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to walk {root}: {message}")]
    TraversalError { root: PathBuf, message: String },
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid UTF-8 in file {path}: {source}")]
    EncodingError {
        path: PathBuf,
        source: std::str::Utf8Error,
    },
}

/// Canonicalize the path and strip UNC prefixes so that
/// comparisons on Windows are consistent.
pub fn unify_path(original: &Path) -> PathBuf {
    let canonical = original
        .canonicalize()
        .unwrap_or_else(|_| original.to_path_buf());
    strip_unc_prefix(&canonical)
}

/// Strips the Windows UNC prefix (\\?\) from a path if present
fn strip_unc_prefix(p: &Path) -> PathBuf {
    let s = p.display().to_string();
    if let Some(stripped) = s.strip_prefix(r"\\?\") {
        PathBuf::from(stripped)
    } else {
        p.to_path_buf()
    }
}

impl SearchError {
    pub fn traversal_error(root: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::TraversalError {
            root: root.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn encoding_error(path: impl Into<PathBuf>, source: std::str::Utf8Error) -> Self {
        let path = path.into();
        Self::EncodingError {
            path: unify_path(&path),
            source,
        }
    }

    /// Maps an I/O error raised while opening `path` to the matching variant
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }

    /// True for errors that abort a whole query rather than a single file
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::TraversalError { .. })
    }
}
