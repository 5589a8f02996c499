use rayon::prelude::*;
use std::path::PathBuf;

use super::processor::FileProcessor;
use super::segmenter::Segmenter;
use crate::results::LocatedWord;

/// Any word longer than `length` characters from any of `files`.
///
/// Files and the lines inside each file are explored in parallel. The first
/// match published wins; once it is known rayon stops starting new file
/// scans, while scans already in flight finish and are discarded. Which match
/// is returned is unspecified when several exist.
pub fn word_longer_than<S: Segmenter>(
    files: &[PathBuf],
    processor: &FileProcessor<S>,
    length: usize,
) -> Option<LocatedWord> {
    files
        .par_iter()
        .find_map_any(|path| processor.find_longer_than(path, length))
}
