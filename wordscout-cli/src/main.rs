use clap::{Parser, Subcommand};
use colored::Colorize;
use std::{num::NonZeroUsize, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordscout::{
    find_common_words, find_unique_words, find_word_longer_than, CliOverrides, LocatedWord,
    SearchConfig, SearchError, Word,
};

type Result<T> = std::result::Result<T, SearchError>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of threads to use
    #[arg(short = 'j', long, global = true)]
    threads: Option<NonZeroUsize>,

    /// File extensions treated as text files (e.g. txt,md)
    #[arg(short = 'e', long, global = true)]
    extensions: Option<String>,

    /// Patterns to ignore (glob format)
    #[arg(short, long, global = true)]
    ignore: Vec<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the words that appear in exactly one file
    #[command(name = "findUniqueWords")]
    FindUniqueWords {
        /// Directory to scan
        directory: PathBuf,
    },

    /// Print the words that appear in every file
    #[command(name = "findCommonWords")]
    FindCommonWords {
        /// Directory to scan
        directory: PathBuf,
    },

    /// Print any word longer than the given length
    #[command(name = "wordLongerThan")]
    WordLongerThan {
        /// Directory to scan
        directory: PathBuf,
        /// Length the word must exceed
        #[arg(allow_negative_numbers = true)]
        length: i64,
    },
}

impl Commands {
    fn directory(&self) -> &PathBuf {
        match self {
            Commands::FindUniqueWords { directory }
            | Commands::FindCommonWords { directory }
            | Commands::WordLongerThan { directory, .. } => directory,
        }
    }
}

fn main() -> Result<()> {
    run()
}

fn build_config(cli: &Cli) -> Result<SearchConfig> {
    let file_config = SearchConfig::load_from(cli.config.as_deref())
        .map_err(|e| SearchError::config_error(e.to_string()))?;

    let overrides = CliOverrides {
        root_path: Some(cli.command.directory().clone()),
        file_extensions: cli.extensions.as_ref().map(|e| {
            e.split(',')
                .map(|s| s.trim().trim_start_matches('.').to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }),
        ignore_patterns: cli.ignore.clone(),
        thread_count: cli.threads,
        log_level: cli.log_level.clone(),
        follow_links: false,
    };
    Ok(file_config.merge_with_cli(overrides))
}

/// Negative lengths match every word
fn length_threshold(length: i64) -> usize {
    if length < 0 {
        0
    } else {
        usize::try_from(length).unwrap_or(usize::MAX)
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    init_logging(&config.log_level);
    debug!("Using configuration: {:?}", config);

    match &cli.command {
        Commands::FindUniqueWords { .. } => {
            let words = find_unique_words(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                print_unique_words(&words);
            }
        }
        Commands::FindCommonWords { .. } => {
            let words = find_common_words(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                print_common_words(&words);
            }
        }
        Commands::WordLongerThan { length, .. } => {
            let found = find_word_longer_than(&config, length_threshold(*length))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                print_longer_word(found.as_ref(), *length);
            }
        }
    }
    Ok(())
}

fn print_unique_words(words: &[LocatedWord]) {
    println!("Found {} unique words", words.len());
    for located in words {
        println!(
            "{}:{}",
            located.word().as_str().green(),
            located.filepath().display().to_string().blue()
        );
    }
}

fn print_common_words(words: &[Word]) {
    println!("Found {} words in common", words.len());
    for word in words {
        println!("{}", word.as_str().green());
    }
}

fn print_longer_word(found: Option<&LocatedWord>, length: i64) {
    match found {
        Some(located) => println!(
            "Found {} in {}",
            located.word().as_str().green(),
            located.filepath().display().to_string().blue()
        ),
        None => println!("No word found longer than {}", length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_length_threshold() {
        assert_eq!(length_threshold(-1), 0);
        assert_eq!(length_threshold(i64::MIN), 0);
        assert_eq!(length_threshold(0), 0);
        assert_eq!(length_threshold(7), 7);
    }

    #[test]
    fn test_explicit_extensions_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("cfg.yaml");
        std::fs::write(&config_path, "file_extensions: [\"md\"]\n").unwrap();

        let cli = Cli::parse_from([
            OsString::from("wordscout"),
            OsString::from("findUniqueWords"),
            dir.path().as_os_str().to_owned(),
            OsString::from("--config"),
            config_path.as_os_str().to_owned(),
            OsString::from("-e"),
            OsString::from("txt"),
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.file_extensions, vec!["txt".to_string()]);
        assert_eq!(config.root_path, dir.path());
    }
}
