/// The scan-segment-aggregate engine.
///
/// Every query follows the same shape: enumerate the text files under a root,
/// hand each file to a worker in a rayon pool, segment its lines into words,
/// and combine the per-file results:
///
/// - [`unique`]: a concurrent map where a second sighting of a word from a
///   different file replaces the entry with a permanent tombstone.
/// - [`common`]: a parallel reduction by set intersection.
/// - [`longer`]: a short-circuiting parallel search that returns the first
///   qualifying word any worker finds.
///
/// The unique and common merges are commutative and associative, so files may
/// finish in any order on any thread.
pub mod common;
pub mod engine;
pub mod longer;
pub mod processor;
pub mod segmenter;
pub mod unique;

pub use engine::{
    find_common_words, find_common_words_in, find_unique_words, find_unique_words_in,
    find_word_longer_than, find_word_longer_than_in,
};
pub use processor::FileProcessor;
pub use segmenter::{Segmenter, Token, UnicodeWordSegmenter};
pub use unique::{UniqueWordAggregator, WordEntry};
