use unicode_categories::UnicodeCategories;
use unicode_segmentation::UnicodeSegmentation;

/// A token cut from a single line, with byte offsets into that line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    /// Length in Unicode scalar values
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Lazy sequence of tokens for one line
pub type Tokens<'a> = Box<dyn Iterator<Item = Token<'a>> + 'a>;

/// Splits a line of text into word tokens.
///
/// Every call to [`Segmenter::segment`] starts from fresh boundary state, so a
/// single segmenter may be shared by all worker threads.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, line: &'a str) -> Tokens<'a>;
}

/// Segmenter based on the Unicode word boundary rules (UAX #29).
///
/// Segments whose first character is not a letter or a decimal digit
/// (whitespace, punctuation, symbols) are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl UnicodeWordSegmenter {
    pub fn new() -> Self {
        Self
    }
}

fn is_word_like(segment: &str) -> bool {
    segment
        .chars()
        .next()
        .is_some_and(|c| c.is_letter() || c.is_number_decimal_digit())
}

impl Segmenter for UnicodeWordSegmenter {
    fn segment<'a>(&self, line: &'a str) -> Tokens<'a> {
        Box::new(
            line.split_word_bound_indices()
                .filter(|(_, text)| is_word_like(text))
                .map(|(start, text)| Token {
                    text,
                    start,
                    end: start + text.len(),
                }),
        )
    }
}
