use rayon::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

use super::processor::FileProcessor;
use super::segmenter::Segmenter;
use crate::results::Word;

/// Set intersection, retaining into the smaller of the two sets
pub fn intersect(a: HashSet<Word>, b: HashSet<Word>) -> HashSet<Word> {
    let (mut smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    smaller.retain(|word| larger.contains(word));
    smaller
}

/// Words occurring in every one of `files`.
///
/// The reduction is seeded by the first per-file set rather than a universal
/// set, so an empty file list yields no words.
pub fn common_words<S: Segmenter>(files: &[PathBuf], processor: &FileProcessor<S>) -> Vec<Word> {
    files
        .par_iter()
        .map(|path| processor.word_set(path))
        .reduce_with(intersect)
        .map(|words| words.into_iter().collect())
        .unwrap_or_default()
}
