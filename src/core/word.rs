//! Playable word representation
//!
//! A Word is an upper-case ASCII alphabetic string between
//! [`WORD_LENGTH_MIN`] and [`WORD_LENGTH_MAX`] letters long.

use std::fmt;
use thiserror::Error;

/// Shortest playable word
pub const WORD_LENGTH_MIN: usize = 5;

/// Longest playable word
pub const WORD_LENGTH_MAX: usize = 15;

/// Check whether a word length is playable
#[inline]
#[must_use]
pub const fn is_playable_length(length: usize) -> bool {
    length >= WORD_LENGTH_MIN && length <= WORD_LENGTH_MAX
}

/// A validated, upper-cased playable word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {WORD_LENGTH_MIN}-{WORD_LENGTH_MAX} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and the text is upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 5..=15
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use trivia_wordle::core::Word;
    ///
    /// let word = Word::new("sport").unwrap();
    /// assert_eq!(word.text(), "SPORT");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("sp0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        // ASCII only, so bytes == chars from here on
        if !is_playable_length(text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the word, returning the upper-case text
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word has at least five letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("HELLO").unwrap();
        assert_eq!(word.text(), "HELLO");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_mixed_case_normalized() {
        for input in ["hello", "HELLO", "heLLo"] {
            assert_eq!(Word::new(input).unwrap().text(), "HELLO");
        }
        assert_eq!(Word::new("PENnY").unwrap().text(), "PENNY");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  crane\n").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_creation_length_bounds() {
        assert!(Word::new("abcde").is_ok());
        assert!(Word::new("abcdefghijklmno").is_ok());
        assert_eq!(Word::new("abcd"), Err(WordError::InvalidLength(4)));
        assert_eq!(
            Word::new("abcdefghijklmnop"),
            Err(WordError::InvalidLength(16))
        );
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(Word::new("  \n"), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("hello!!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crème"), Err(WordError::NonAscii));
    }

    #[test]
    fn playable_length_range() {
        assert!(!is_playable_length(4));
        assert!(is_playable_length(5));
        assert!(is_playable_length(15));
        assert!(!is_playable_length(16));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
