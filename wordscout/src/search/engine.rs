use rayon::ThreadPool;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::common::common_words;
use super::longer::word_longer_than;
use super::processor::FileProcessor;
use super::unique::unique_words;
use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::filters::enumerate_files;
use crate::results::{LocatedWord, Word};

/// Builds the worker pool a query runs in
fn build_pool(config: &SearchConfig) -> SearchResult<ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count.get())
        .thread_name(|i| format!("wordscout-{}", i))
        .build()
        .map_err(|e| SearchError::config_error(format!("Failed to build thread pool: {}", e)))
}

/// Enumerates files, then runs `query` over them inside the worker pool
fn run_query<T, F>(config: &SearchConfig, name: &str, query: F) -> SearchResult<T>
where
    T: Send,
    F: FnOnce(&[PathBuf], &FileProcessor) -> T + Send,
{
    info!("Starting {} under {}", name, config.root_path.display());

    let files = enumerate_files(config)?;
    debug!("Found {} files to process", files.len());

    let pool = build_pool(config)?;
    let processor = FileProcessor::new();
    let result = pool.install(|| query(&files, &processor));

    processor.metrics().log_stats();
    Ok(result)
}

/// Words that occur in exactly one text file under the configured root
pub fn find_unique_words(config: &SearchConfig) -> SearchResult<Vec<LocatedWord>> {
    let words = run_query(config, "findUniqueWords", unique_words)?;
    info!("Found {} unique words", words.len());
    Ok(words)
}

/// Words that occur in every text file under the configured root
pub fn find_common_words(config: &SearchConfig) -> SearchResult<Vec<Word>> {
    let words = run_query(config, "findCommonWords", common_words)?;
    info!("Found {} words in common", words.len());
    Ok(words)
}

/// Any word longer than `length` characters under the configured root
pub fn find_word_longer_than(
    config: &SearchConfig,
    length: usize,
) -> SearchResult<Option<LocatedWord>> {
    let found = run_query(config, "wordLongerThan", |files, processor| {
        word_longer_than(files, processor, length)
    })?;
    match &found {
        Some(located) => info!("Found {} longer than {}", located, length),
        None => info!("No word found longer than {}", length),
    }
    Ok(found)
}

/// [`find_unique_words`] with default settings
pub fn find_unique_words_in(root: impl AsRef<Path>) -> SearchResult<Vec<LocatedWord>> {
    find_unique_words(&SearchConfig::new(root.as_ref()))
}

/// [`find_common_words`] with default settings
pub fn find_common_words_in(root: impl AsRef<Path>) -> SearchResult<Vec<Word>> {
    find_common_words(&SearchConfig::new(root.as_ref()))
}

/// [`find_word_longer_than`] with default settings
pub fn find_word_longer_than_in(
    root: impl AsRef<Path>,
    length: usize,
) -> SearchResult<Option<LocatedWord>> {
    find_word_longer_than(&SearchConfig::new(root.as_ref()), length)
}
