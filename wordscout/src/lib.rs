pub mod config;
pub mod errors;
pub mod filters;
pub mod metrics;
pub mod results;
pub mod search;

pub use config::{CliOverrides, SearchConfig};
pub use errors::{SearchError, SearchResult};
pub use results::{LocatedWord, Word};
pub use search::{
    find_common_words, find_common_words_in, find_unique_words, find_unique_words_in,
    find_word_longer_than, find_word_longer_than_in,
};
