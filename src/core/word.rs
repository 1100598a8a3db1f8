//! Word list entry representation
//!
//! A Word is a trimmed, uppercased 5-character entry taken from the master list.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of characters in every word, and the stride of the packed buffer
pub const WORD_LEN: usize = 5;

/// A 5-character word list entry, normalized to uppercase
///
/// Ordering is lexicographic by character code, which is the order the
/// packed buffer is emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for entries that cannot become a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a raw list entry
    ///
    /// Surrounding whitespace is trimmed before the length check. Only the
    /// length is validated: digits or punctuation in a 5-character entry are
    /// kept as-is.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the trimmed entry is not exactly
    /// 5 characters long.
    ///
    /// # Examples
    /// ```
    /// use word_pack::core::Word;
    ///
    /// let word = Word::new(" crane\n").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let trimmed = text.trim();

        let len = trimmed.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        Ok(Self {
            text: trimmed.to_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of distinct characters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.text.chars().collect::<FxHashSet<char>>().len()
    }

    /// Check that the word is exactly 5 pairwise distinct characters
    ///
    /// A few characters uppercase to more than one letter (`ﬁ` becomes `FI`),
    /// so the uppercased text can be longer than the trimmed entry. Such words
    /// are never unique.
    ///
    /// # Examples
    /// ```
    /// use word_pack::core::Word;
    ///
    /// assert!(Word::new("crane").unwrap().has_unique_letters());
    /// assert!(!Word::new("apple").unwrap().has_unique_letters());
    /// ```
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        self.text.chars().count() == WORD_LEN && self.distinct_letters() == WORD_LEN
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
