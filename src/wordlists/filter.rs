//! Unique-letter filtering and ordering
//!
//! The embedded game stores only words without repeated letters, sorted so the
//! device can binary search the packed buffer.

use crate::core::Word;

/// Keep the words whose letters are pairwise distinct, in input order
#[must_use]
pub fn filter_unique_letters(words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| word.has_unique_letters())
        .cloned()
        .collect()
}

/// Sort words in ascending character-code order
///
/// Identical entries are not merged; they end up adjacent.
pub fn sort_words(words: &mut [Word]) {
    words.sort();
}

/// Filter then sort, producing the collection written to the header
///
/// # Examples
/// ```
/// use word_pack::wordlists::{build_collection, loader::words_from_lines};
///
/// let words = words_from_lines("APPLE\nCRANE\nBERRY\nABCDE\n");
/// let collection = build_collection(&words);
/// let texts: Vec<&str> = collection.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["ABCDE", "CRANE"]);
/// ```
#[must_use]
pub fn build_collection(words: &[Word]) -> Vec<Word> {
    let mut collection = filter_unique_letters(words);
    sort_words(&mut collection);
    collection
}
