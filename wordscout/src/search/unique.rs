use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::processor::FileProcessor;
use super::segmenter::Segmenter;
use crate::results::{LocatedWord, Word};

/// Merge state for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEntry {
    /// Seen in exactly one file so far
    Single(LocatedWord),
    /// Seen in two or more distinct files; permanent
    Tombstone,
}

impl WordEntry {
    /// Combines two observations of the same word.
    ///
    /// Commutative and associative: two observations from one file collapse
    /// to that observation, anything else collapses to `Tombstone`.
    pub fn merge(self, other: WordEntry) -> WordEntry {
        match (self, other) {
            (WordEntry::Single(a), WordEntry::Single(b)) if a.filepath() == b.filepath() => {
                WordEntry::Single(a)
            }
            _ => WordEntry::Tombstone,
        }
    }
}

/// Concurrent word → entry map shared by all workers of a unique-word query
#[derive(Debug, Default)]
pub struct UniqueWordAggregator {
    entries: DashMap<Word, WordEntry>,
}

impl UniqueWordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one entry under the shard lock of its key
    fn merge_entry(&self, word: Word, incoming: WordEntry) {
        match self.entries.entry(word) {
            Entry::Occupied(mut occupied) => {
                let current = std::mem::replace(occupied.get_mut(), WordEntry::Tombstone);
                *occupied.get_mut() = current.merge(incoming);
            }
            Entry::Vacant(vacant) => {
                vacant.insert(incoming);
            }
        }
    }

    /// Records one occurrence of a word
    pub fn add(&self, located: LocatedWord) {
        let word = located.word().clone();
        self.merge_entry(word, WordEntry::Single(located));
    }

    /// Records the distinct words of one file
    pub fn add_file(&self, path: &Path, words: HashSet<Word>) {
        for word in words {
            self.add(LocatedWord::new(word, path));
        }
    }

    /// Words that were never tombstoned
    pub fn into_words(self) -> Vec<LocatedWord> {
        self.entries
            .into_iter()
            .filter_map(|(_, entry)| match entry {
                WordEntry::Single(located) => Some(located),
                WordEntry::Tombstone => None,
            })
            .collect()
    }
}

/// Words occurring in exactly one of `files`, each paired with its file
pub fn unique_words<S: Segmenter>(files: &[PathBuf], processor: &FileProcessor<S>) -> Vec<LocatedWord> {
    let aggregator = UniqueWordAggregator::new();
    files
        .par_iter()
        .for_each(|path| aggregator.add_file(path, processor.word_set(path)));
    aggregator.into_words()
}
