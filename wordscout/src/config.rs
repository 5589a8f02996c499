use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Configuration for a word query.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations, later entries
/// overriding earlier ones:
/// 1. Global `$HOME/.config/wordscout/config.yaml`
/// 2. Local `.wordscout.yaml` in the current directory
/// 3. Custom config file specified via `--config` flag
///
/// # Configuration Format
///
/// ```yaml
/// # Root directory to scan
/// root_path: "data"
///
/// # File extensions treated as text files
/// file_extensions:
///   - "txt"
///
/// # Patterns to ignore (glob syntax)
/// ignore_patterns:
///   - "**/drafts/**"
///
/// # Thread count (default: CPU cores)
/// thread_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
///
/// When using the CLI, command-line arguments take precedence over config file
/// values; see [`SearchConfig::merge_with_cli`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Root directory to start the scan from
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// File extensions (without the dot) that mark a text file
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,

    /// Patterns to ignore (supports glob syntax)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Number of worker threads in the query pool
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether the walk follows symbolic links
    #[serde(default)]
    pub follow_links: bool,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(default_root_path())
    }
}

impl SearchConfig {
    /// Creates a configuration with default settings rooted at `root_path`
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            file_extensions: default_file_extensions(),
            ignore_patterns: Vec::new(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
            follow_links: false,
        }
    }

    /// Sets the worker thread count
    pub fn with_threads(mut self, thread_count: NonZeroUsize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Loads configuration from the default locations plus a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("wordscout/config.yaml")),
            Some(PathBuf::from(".wordscout.yaml")),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // An explicit file must exist
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values.
    ///
    /// Only values the user actually passed override the file.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if let Some(root_path) = cli.root_path {
            self.root_path = root_path;
        }
        if let Some(file_extensions) = cli.file_extensions {
            self.file_extensions = file_extensions;
        }
        if !cli.ignore_patterns.is_empty() {
            self.ignore_patterns = cli.ignore_patterns;
        }
        if let Some(thread_count) = cli.thread_count {
            self.thread_count = thread_count;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        if cli.follow_links {
            self.follow_links = true;
        }
        self
    }
}

/// Settings given on the command line; `None` means "not passed"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub root_path: Option<PathBuf>,
    pub file_extensions: Option<Vec<String>>,
    pub ignore_patterns: Vec<String>,
    pub thread_count: Option<NonZeroUsize>,
    pub log_level: Option<String>,
    pub follow_links: bool,
}
