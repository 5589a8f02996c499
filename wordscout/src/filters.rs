/// File enumeration and filtering.
///
/// A file takes part in a query when it is a regular file, its extension is
/// one of the configured text extensions (case-insensitive), and no ignore
/// pattern matches its path. Enumeration walks the whole tree, hidden entries
/// and `.gitignore`d entries included.
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};

/// Checks if a file name ends with `.` plus one of the recognized extensions.
///
/// The comparison is case-sensitive and a bare `.txt` name counts.
pub fn has_valid_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| {
        name.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// True for regular files, and for symlinks that resolve to a regular file
fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

/// Checks if a file should be ignored based on ignore patterns
pub fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
    let normalized_path = path.to_string_lossy().replace('\\', "/");

    ignore_patterns.iter().any(|pattern| {
        Pattern::new(pattern)
            .map(|p| p.matches(&normalized_path))
            .unwrap_or(false)
    })
}

/// Determines if a file should be included in a query
pub fn should_include_file(path: &Path, config: &SearchConfig) -> bool {
    has_valid_extension(path, &config.file_extensions)
        && !should_ignore(path, &config.ignore_patterns)
}

/// Recursively lists the text files under the configured root.
///
/// Fails with `TraversalError` when the root does not exist or any part of
/// the walk cannot be read. Result order is unspecified.
pub fn enumerate_files(config: &SearchConfig) -> SearchResult<Vec<PathBuf>> {
    let root = &config.root_path;
    if !root.exists() {
        return Err(SearchError::traversal_error(root, "root path does not exist"));
    }

    let mut walker = WalkBuilder::new(root);
    walker
        .standard_filters(false)
        .follow_links(config.follow_links);

    let mut files = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|e| SearchError::traversal_error(root, e.to_string()))?;
        if is_regular_file(&entry) && should_include_file(entry.path(), config) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}
