/// Result types shared by the word queries.
///
/// A [`Word`] is the canonical, lowercase form of a token and is the key used by
/// every aggregation step. A [`LocatedWord`] pairs a word with the file it was
/// found in and is the unit of result for the unique-word and long-word queries.
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// A lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Creates a word from a raw token, discarding case
    pub fn new(token: &str) -> Self {
        Self(token.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A word together with the file where it has been found
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocatedWord {
    word: Word,
    filepath: PathBuf,
}

impl LocatedWord {
    pub fn new(word: Word, filepath: impl Into<PathBuf>) -> Self {
        Self {
            word,
            filepath: filepath.into(),
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}

impl fmt::Display for LocatedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.filepath.display())
    }
}
