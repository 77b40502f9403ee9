//! Ladder word representation
//!
//! A Word is a normalized dictionary word: trimmed, lowercased, ASCII alphabetic.
//! Unlike fixed-length puzzles, ladder words may be any length from one letter up.

use std::fmt;
use thiserror::Error;

/// A normalized word usable as a node in the ladder graph
///
/// Construction trims whitespace and lowercases, so `Word::new(" CAT ")` and
/// `Word::new("cat")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty after trimming")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains non-alphabetic characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input is empty, non-ASCII, or
    /// contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use weaver_solver::core::Word;
    ///
    /// let word = Word::new("  CAT ").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in letters (ASCII, so bytes == letters)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True only for the empty word, which `new` never produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the word, yielding the owned string
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
