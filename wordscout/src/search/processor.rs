use memmap2::Mmap;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{trace, warn};

use super::segmenter::{Segmenter, Token, UnicodeWordSegmenter};
use crate::errors::{SearchError, SearchResult};
use crate::metrics::ScanMetrics;
use crate::results::{LocatedWord, Word};

const BUFFER_CAPACITY: usize = 65536;
pub(crate) const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// Splits decoded file contents into owned lines
fn decode_lines(bytes: &[u8], path: &Path) -> SearchResult<Vec<String>> {
    let contents =
        std::str::from_utf8(bytes).map_err(|e| SearchError::encoding_error(path, e))?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds per-file word views on top of a [`Segmenter`]
#[derive(Debug)]
pub struct FileProcessor<S = UnicodeWordSegmenter> {
    segmenter: S,
    metrics: ScanMetrics,
}

impl FileProcessor {
    /// Creates a new FileProcessor using Unicode word boundaries
    pub fn new() -> Self {
        Self::with_segmenter(UnicodeWordSegmenter::new())
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Segmenter> FileProcessor<S> {
    /// Creates a new FileProcessor with the given segmenter
    pub fn with_segmenter(segmenter: S) -> Self {
        Self {
            segmenter,
            metrics: ScanMetrics::new(),
        }
    }

    /// Gets the current scan metrics
    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    fn read_small_file(&self, path: &Path) -> SearchResult<Vec<String>> {
        trace!("Using simple file processing for: {}", path.display());
        let bytes = std::fs::read(path).map_err(|e| SearchError::from_io(path, e))?;
        decode_lines(&bytes, path)
    }

    fn read_mmap_file(&self, path: &Path) -> SearchResult<Vec<String>> {
        trace!("Using memory mapping for: {}", path.display());
        let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(SearchError::IoError)?;
        decode_lines(&mmap, path)
    }

    /// Reads all lines of a file, choosing the strategy by file size
    pub fn read_lines(&self, path: &Path) -> SearchResult<Vec<String>> {
        let size = path
            .metadata()
            .map_err(|e| SearchError::from_io(path, e))?
            .len();

        let lines = if size >= LARGE_FILE_THRESHOLD {
            self.read_mmap_file(path)?
        } else {
            self.read_small_file(path)?
        };
        self.metrics.record_file_processing(size);
        Ok(lines)
    }

    /// Reads all lines of a file; an unreadable file yields no lines
    pub fn lines_or_empty(&self, path: &Path) -> Vec<String> {
        match self.read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                self.metrics.record_failure();
                Vec::new()
            }
        }
    }

    /// Raw token stream over already-read lines, in original casing
    pub fn tokens<'a>(&'a self, lines: &'a [String]) -> impl Iterator<Item = Token<'a>> + 'a {
        lines
            .iter()
            .flat_map(move |line| self.segmenter.segment(line))
    }

    /// Distinct lowercase words of one file
    pub fn word_set(&self, path: &Path) -> HashSet<Word> {
        trace!("Building word set for: {}", path.display());
        let lines = self.lines_or_empty(path);
        self.tokens(&lines).map(|t| Word::new(t.text)).collect()
    }

    fn longer_in_line(&self, line: &str, length: usize, path: &Path) -> Option<LocatedWord> {
        self.segmenter
            .segment(line)
            .find(|token| token.char_len() > length)
            .map(|token| LocatedWord::new(Word::new(token.text), path))
    }

    fn search_longer_than(&self, path: &Path, length: usize) -> SearchResult<Option<LocatedWord>> {
        let size = path
            .metadata()
            .map_err(|e| SearchError::from_io(path, e))?
            .len();

        if size >= LARGE_FILE_THRESHOLD {
            let lines = self.read_mmap_file(path)?;
            self.metrics.record_file_processing(size);
            return Ok(lines
                .par_iter()
                .find_map_any(|line| self.longer_in_line(line, length, path)));
        }

        let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
        self.metrics.record_file_processing(size);
        let reader = BufReader::with_capacity(BUFFER_CAPACITY, file);
        for line in reader.lines() {
            let line = line.map_err(SearchError::IoError)?;
            if let Some(found) = self.longer_in_line(&line, length, path) {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Any word of the file longer than `length` characters.
    ///
    /// Small files are streamed line by line and reading stops at the first
    /// match. Memory mapped files are searched across lines in parallel.
    pub fn find_longer_than(&self, path: &Path, length: usize) -> Option<LocatedWord> {
        trace!("Searching {} for words longer than {}", path.display(), length);
        match self.search_longer_than(path, length) {
            Ok(found) => found,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                self.metrics.record_failure();
                None
            }
        }
    }
}
